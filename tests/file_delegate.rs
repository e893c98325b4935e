//! Scenario tests with a real file as the delegate: nearly every operation
//! dispatches natively, and the rest (line reads, closed state) fall back.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use rawio_wrap::{RawStreamAdapter, SeekFrom};

fn test_file(name: &str, content: &[u8]) -> Result<PathBuf> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = fs::create_dir_all("target");
    let path = PathBuf::from("target").join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn file_is_seekable_and_reports_position() -> Result<()> {
    let path = test_file("rawio_wrap_seek.bin", b"xx\nxx")?;
    let mut adapter = RawStreamAdapter::new(File::open(&path)?);

    assert!(adapter.is_seekable()?);
    assert_eq!(adapter.tell()?, 0);
    assert_eq!(adapter.seek(SeekFrom::Start(1))?, 1);
    assert_eq!(adapter.tell()?, 1);
    assert_eq!(adapter.read(1)?, b"x");
    Ok(())
}

#[cfg(unix)]
#[test]
fn file_exposes_a_positive_descriptor() -> Result<()> {
    let path = test_file("rawio_wrap_fd.bin", b"xx\nxx")?;
    let adapter = RawStreamAdapter::new(File::open(&path)?);
    assert!(adapter.file_descriptor()? > 0);
    Ok(())
}

#[test]
fn file_reads_dispatch_natively() -> Result<()> {
    let path = test_file("rawio_wrap_read.bin", b"xx\nxx")?;
    let mut adapter = RawStreamAdapter::new(File::open(&path)?);

    assert_eq!(adapter.read(2)?, b"xx");
    assert_eq!(adapter.read_all()?, b"\nxx");

    let mut adapter = RawStreamAdapter::new(File::open(&path)?);
    let mut buf = [0u8; 5];
    assert_eq!(adapter.read_into(&mut buf)?, 5);
    assert_eq!(&buf, b"xx\nxx");
    Ok(())
}

#[test]
fn file_line_reads_use_the_fallback_over_native_reads() -> Result<()> {
    let path = test_file("rawio_wrap_lines.bin", b"xx\nxx")?;
    let mut adapter = RawStreamAdapter::new(File::open(&path)?);

    assert_eq!(adapter.read_line(None)?, b"xx\n");
    assert_eq!(adapter.read_line(None)?, b"xx");
    assert_eq!(adapter.read_line(None)?, b"");
    Ok(())
}

#[test]
fn file_is_not_a_terminal_and_assumed_readable() -> Result<()> {
    let path = test_file("rawio_wrap_queries.bin", b"xx\nxx")?;
    let adapter = RawStreamAdapter::new(File::open(&path)?);

    assert!(!adapter.is_interactive()?);
    // File has no native readable/writable query; the fixed defaults apply.
    assert!(adapter.is_readable()?);
    assert!(!adapter.is_writable()?);
    Ok(())
}

#[test]
fn file_truncate_resizes_to_the_given_length() -> Result<()> {
    let path = test_file("rawio_wrap_truncate.bin", b"xx\nxx")?;
    let file = OpenOptions::new().read(true).write(true).open(&path)?;
    let mut adapter = RawStreamAdapter::new(file);

    assert_eq!(adapter.truncate(Some(2))?, 2);
    adapter.flush()?;
    assert_eq!(fs::read(&path)?, b"xx");
    Ok(())
}

#[test]
fn file_truncate_without_a_size_cuts_at_the_current_position() -> Result<()> {
    let path = test_file("rawio_wrap_truncate_pos.bin", b"xx\nxx")?;
    let file = OpenOptions::new().read(true).write(true).open(&path)?;
    let mut adapter = RawStreamAdapter::new(file);

    adapter.seek(SeekFrom::Start(3))?;
    assert_eq!(adapter.truncate(None)?, 3);
    assert_eq!(fs::read(&path)?, b"xx\n");
    Ok(())
}

#[test]
fn file_writes_dispatch_natively() -> Result<()> {
    let path = test_file("rawio_wrap_write.bin", b"")?;
    let file = OpenOptions::new().write(true).open(&path)?;
    let mut adapter = RawStreamAdapter::new(file);

    assert_eq!(adapter.write(b"xx")?, 2);
    adapter.write_lines(&[b"\n", b"xx"])?;
    adapter.flush()?;
    assert_eq!(fs::read(&path)?, b"xx\nxx");
    Ok(())
}

#[test]
fn file_close_falls_back_to_adapter_bookkeeping() -> Result<()> {
    let path = test_file("rawio_wrap_close.bin", b"xx\nxx")?;
    let mut adapter = RawStreamAdapter::new(File::open(&path)?);

    assert!(!adapter.is_closed()?);
    adapter.close()?;
    assert!(adapter.is_closed()?);
    adapter.close()?;
    assert!(adapter.is_closed()?);
    Ok(())
}
