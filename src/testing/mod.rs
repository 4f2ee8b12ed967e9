
#[allow(unused_imports)]
pub use ports::MemoryCatalog;
#[allow(unused_imports)]
pub use ports::RecordingWriter;
#[allow(unused_imports)]
pub use ports::WriterFailure;
#[allow(unused_imports)]
pub use ports::catalog_with;
