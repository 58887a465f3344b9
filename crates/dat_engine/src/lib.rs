//! Dat engine: byte decoding, loading, reporting and export around the core parser.
mod decode;
mod export;
mod load;
mod persist;
mod preview;
mod report;

pub use decode::{decode_dat, split_lines, DecodeError, DecodedDat};
pub use export::{build_json_export, write_json_export, ExportError, ExportOptions};
pub use load::{load_thread, parse_dat_bytes, LoadError, LoadedThread};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use preview::{preview_body, DEFAULT_PREVIEW_CHARS};
pub use report::{render_report, ReportOptions};
