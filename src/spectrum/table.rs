//! # 能谱表输出
//!
//! 将 bin 序列写为制表符分隔的定点格式表格，
//! 即下游模拟初级粒子发生器读取的文件格式。
//!
//! ## 输出格式
//! 表头一行，随后每 bin 一行；列序、制表符分隔与
//! 6 位小数精度是对下游的字节级约定，不得改动。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/spectrum.rs` 的 BinRecord
//! - 使用 `csv` 库（制表符分隔）写入

use crate::error::{Result, SpecgenError};
use crate::models::BinRecord;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 输出表头，下游按列序读取
const HEADER: [&str; 8] = [
    "#bin",
    "bin_low_keV",
    "bin_center_keV",
    "bin_high_keV",
    "counts",
    "error",
    "polarization",
    "polarization_error",
];

/// 写出能谱表到任意 writer
///
/// 只做序列化，不改动 bin 的顺序和取值。
pub fn write_spectrum<W: Write>(bins: &[BinRecord], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    wtr.write_record(HEADER).map_err(SpecgenError::CsvError)?;

    for bin in bins {
        wtr.write_record(&[
            bin.index.to_string(),
            format!("{:.6}", bin.low_kev),
            format!("{:.6}", bin.center_kev),
            format!("{:.6}", bin.high_kev),
            format!("{:.6}", bin.counts),
            format!("{:.6}", bin.count_error),
            format!("{:.6}", bin.polarization),
            format!("{:.6}", bin.polarization_error),
        ])
        .map_err(SpecgenError::CsvError)?;
    }

    wtr.flush()
        .map_err(csv::Error::from)
        .map_err(SpecgenError::CsvError)?;

    Ok(())
}

/// 写出能谱表到文件
///
/// 目标文件在构建成功之后才创建，校验失败不会留下残缺文件。
pub fn write_spectrum_file(bins: &[BinRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| SpecgenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_spectrum(bins, BufWriter::new(file))
}
