use crate::filesystem::FileSystem;
use std::io::{BufRead, Write};

/// What a single command run works against: the filesystem, the console
/// output and the line input used for confirmations.
pub struct Context<'a> {
    pub fs: &'a dyn FileSystem,
    pub out: &'a mut dyn Write,
    pub input: &'a mut dyn BufRead,
}

impl<'a> Context<'a> {
    pub fn new(fs: &'a dyn FileSystem, out: &'a mut dyn Write, input: &'a mut dyn BufRead) -> Self {
        Self { fs, out, input }
    }
}
