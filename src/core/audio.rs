//! # Audio Playback
//!
//! The core only knows the [`AudioPlayer`] trait. Playback is fire-and-forget:
//! a card's `audio_filename` goes in, nothing comes back, and failures end
//! up in the log rather than on screen.
//!
//! [`SystemPlayer`] resolves the filename inside the audio directory and
//! hands the file to an external program. That program is the configured
//! command or, when none is set, whatever the OS opens audio files with.
//!
//! A configured command is owned by the player: starting a clip stops and
//! reaps the previous one, and dropping the player stops the last one.

use log::{debug, info, warn};
use std::fmt;
use std::cell::RefCell;
use std::path::{Component, Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Something that can play a card's audio.
pub trait AudioPlayer {
    /// Start playing `filename`. Never fails from the caller's point of view.
    fn play(&self, filename: &str);
}

/// Why a filename could not be turned into a playable path.
#[derive(Debug, PartialEq, Eq)]
pub enum MediaError {
    Empty,
    Absolute,
    ParentComponent,
    NotFound,
    NotFile,
    SymbolicLink,
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MediaError::Empty => "empty filename",
            MediaError::Absolute => "absolute paths are not allowed",
            MediaError::ParentComponent => "parent directory components are not allowed",
            MediaError::NotFound => "file does not exist",
            MediaError::NotFile => "not a regular file",
            MediaError::SymbolicLink => "symbolic links are not allowed",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for MediaError {}

/// Plays audio files from a directory with an external program.
#[derive(Debug)]
pub struct SystemPlayer {
    dir: PathBuf,
    command: Option<String>,
    args: Vec<String>,
    current: RefCell<Option<Child>>,
}

impl SystemPlayer {
    /// Open files with the OS default handler.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            command: None,
            args: Vec::new(),
            current: RefCell::new(None),
        }
    }

    /// Run `command [args..] <file>` instead of the OS default handler.
    pub fn with_command(mut self, command: String, args: Vec<String>) -> Self {
        self.command = Some(command);
        self.args = args;
        self
    }

    /// Map a card's audio filename to a file beneath the audio directory.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, MediaError> {
        if filename.is_empty() {
            return Err(MediaError::Empty);
        }
        let relative = Path::new(filename);
        if relative.is_absolute() || relative.has_root() {
            return Err(MediaError::Absolute);
        }
        if relative.components().any(|c| c == Component::ParentDir) {
            return Err(MediaError::ParentComponent);
        }

        let path = self.dir.join(relative);
        let meta = path
            .symlink_metadata()
            .map_err(|_| MediaError::NotFound)?;
        if meta.file_type().is_symlink() {
            return Err(MediaError::SymbolicLink);
        }
        if !meta.is_file() {
            return Err(MediaError::NotFile);
        }
        Ok(path)
    }

    /// Stop the clip started by the previous `play`, if it is still running.
    fn stop_current(&self) {
        let Some(mut child) = self.current.borrow_mut().take() else {
            return;
        };
        match child.try_wait() {
            Ok(Some(_)) => {}
            _ => {
                if let Err(e) = child.kill() {
                    debug!("Audio player {} already gone: {}", child.id(), e);
                }
                if let Err(e) = child.wait() {
                    warn!("Failed to reap audio player {}: {}", child.id(), e);
                }
            }
        }
    }

    fn launch(&self, path: &Path) -> std::io::Result<()> {
        self.stop_current();
        match &self.command {
            Some(command) => {
                let child = Command::new(command)
                    .args(&self.args)
                    .arg(path)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()?;
                *self.current.borrow_mut() = Some(child);
                Ok(())
            }
            None => open::that_detached(path),
        }
    }
}

impl Drop for SystemPlayer {
    fn drop(&mut self) {
        self.stop_current();
    }
}

impl AudioPlayer for SystemPlayer {
    fn play(&self, filename: &str) {
        let path = match self.resolve(filename) {
            Ok(path) => path,
            Err(e) => {
                warn!("Cannot play audio {:?}: {}", filename, e);
                return;
            }
        };
        match self.launch(&path) {
            Ok(()) => info!("Playing {}", path.display()),
            Err(e) => warn!("Failed to start audio player for {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn player_with_file(name: &str) -> (TempDir, SystemPlayer) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(name), b"ID3").unwrap();
        let player = SystemPlayer::new(dir.path());
        (dir, player)
    }

    #[test]
    fn test_resolve_existing_file() {
        let (dir, player) = player_with_file("ae.mp3");
        assert_eq!(player.resolve("ae.mp3"), Ok(dir.path().join("ae.mp3")));
    }

    #[test]
    fn test_resolve_rejects_bad_paths() {
        let (_dir, player) = player_with_file("ae.mp3");
        assert_eq!(player.resolve(""), Err(MediaError::Empty));
        assert_eq!(player.resolve("/etc/passwd"), Err(MediaError::Absolute));
        assert_eq!(player.resolve("../ae.mp3"), Err(MediaError::ParentComponent));
        assert_eq!(player.resolve("missing.mp3"), Err(MediaError::NotFound));
    }

    #[test]
    fn test_resolve_rejects_directories() {
        let (dir, player) = player_with_file("ae.mp3");
        fs::create_dir(dir.path().join("nested")).unwrap();
        assert_eq!(player.resolve("nested"), Err(MediaError::NotFile));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_rejects_symlinks() {
        let (dir, player) = player_with_file("ae.mp3");
        std::os::unix::fs::symlink(dir.path().join("ae.mp3"), dir.path().join("link.mp3"))
            .unwrap();
        assert_eq!(player.resolve("link.mp3"), Err(MediaError::SymbolicLink));
    }

    #[test]
    fn test_play_missing_file_is_silent() {
        let dir = TempDir::new().unwrap();
        let player = SystemPlayer::new(dir.path());
        player.play("nope.mp3");
    }

    #[test]
    fn test_play_with_unknown_command_is_silent() {
        let (_dir, player) = player_with_file("ae.mp3");
        let player = player.with_command("fayin-no-such-player".to_string(), Vec::new());
        player.play("ae.mp3");
        assert!(player.current.borrow().is_none());
    }

    fn running_pid(player: &SystemPlayer) -> u32 {
        player
            .current
            .borrow()
            .as_ref()
            .map(|child| child.id())
            .unwrap()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_replaying_stops_and_reaps_previous_clip() {
        let (_dir, player) = player_with_file("ae.mp3");
        let player = player.with_command(
            "sh".to_string(),
            vec!["-c".to_string(), "sleep 5".to_string()],
        );

        player.play("ae.mp3");
        let first = running_pid(&player);
        assert!(Path::new(&format!("/proc/{first}")).exists());

        player.play("ae.mp3");
        let second = running_pid(&player);
        assert_ne!(first, second);
        // Reaped children leave no /proc entry, zombies do.
        assert!(!Path::new(&format!("/proc/{first}")).exists());

        drop(player);
        assert!(!Path::new(&format!("/proc/{second}")).exists());
    }
}
