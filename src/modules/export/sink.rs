//! Destinations for the generated document: a file or a clipboard.

use crate::error::{TikzError, TikzResult};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A clipboard-like sink provided by the host
pub trait Clipboard {
    /// Place `text` on the clipboard, returning whether it worked
    fn copy(&mut self, text: &str) -> bool;
}

/// Programs tried in order by [`SystemClipboard`]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Clipboard backed by the platform's command line tools
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        CLIPBOARD_COMMANDS
            .iter()
            .any(|(program, args)| pipe_to(program, args, text))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    // stdin is dropped at the end of the closure so the program sees EOF
    let written = child
        .stdin
        .take()
        .map(|mut stdin| stdin.write_all(text.as_bytes()).is_ok())
        .unwrap_or(false);
    let succeeded = matches!(child.wait(), Ok(status) if status.success());
    if succeeded && written {
        log::debug!("copied {} bytes with {}", text.len(), program);
    }
    succeeded && written
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}

/// Write `text` to `path`.
///
/// The text goes to a sibling `.partial` file first and is renamed into
/// place, so `path` is either completely written or left untouched.
pub fn write_file(path: &Path, text: &str) -> TikzResult<()> {
    let partial = partial_path(path);
    let result = fs::write(&partial, text).and_then(|_| fs::rename(&partial, path));
    if let Err(source) = result {
        // the partial file may not exist at all
        let _ = fs::remove_file(&partial);
        return Err(TikzError::FileWrite {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
