#[path = "io/file_io.rs"]
mod file_io;
#[path = "io/prg.rs"]
mod prg;
