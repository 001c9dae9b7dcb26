use flate2::read::GzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

const BUF_CAPACITY: usize = 128 * 1024; // 128 KiB

// Buffered line reader over a plain or gzipped file, with a byte progress
// bar on the underlying stream. indicatif hides itself on non-TTY stderr.
pub fn open_reader(path: &Path) -> anyhow::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();

    let pb = ProgressBar::new(file_size);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        )?
        .progress_chars("=>-"),
    );
    let pb_reader = pb.wrap_read(BufReader::with_capacity(BUF_CAPACITY, file));

    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(pb_reader))
    } else {
        Box::new(pb_reader)
    };
    Ok(BufReader::with_capacity(BUF_CAPACITY, reader))
}

pub fn create_writer(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::with_capacity(BUF_CAPACITY, file))
}
