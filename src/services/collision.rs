//! 重名解决服务 - 业务能力层
//!
//! 目标目录中已存在同名文件时，在主干后追加数字后缀找到空位

use std::path::{Path, PathBuf};

/// 为候选路径找到一个当前不存在的目标路径
///
/// 候选路径不存在时原样返回；否则从 1 开始追加 `_{n}` 后缀逐一探测。
/// 每轮追加前会剥离上一轮加上的后缀，因此后缀不会累积成
/// `name_1_2` 这样的连环形式。
///
/// 每次循环做一次存在性检查，不保证在并发写入者下无冲突。
pub fn resolve_collision(candidate: &Path) -> PathBuf {
    let extension = candidate
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    let mut new_path = candidate.to_path_buf();
    let mut counter: usize = 1;

    while new_path.exists() {
        let mut stem = new_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        // 剥离上一轮追加的 _{n-1} 后缀，保持从原始主干重新推导
        if counter > 1 {
            let previous = format!("_{}", counter - 1);
            if stem.ends_with(&previous) {
                stem.truncate(stem.len() - previous.len());
            }
        }

        let file_name = match &extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        new_path = candidate.with_file_name(file_name);
        counter += 1;
    }

    new_path
}
