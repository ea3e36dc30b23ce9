//! Integration tests driving every variant through a scripted backend.
//!
//! These tests verify that:
//! 1. Each variant issues the commands its target understands and parses the output
//! 2. Symlink views, classification and `path()` agree across variants
//! 3. Checksums, mount detection and versions follow the derived-operation rules
//! 4. Errors propagate from primitives but never from checksums

use remote_file::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// =============================================================================
// Scripted Backend
// =============================================================================

enum Response {
    Output(CommandResult),
    Malformed,
}

/// Backend answering from a fixed command → output table.
///
/// Unscripted commands fail with `FileError::Command` so a test notices any
/// command it did not expect.
#[derive(Default)]
struct ScriptedBackend {
    responses: HashMap<String, Response>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new() -> Self {
        Self::default()
    }

    fn on(mut self, command: impl Into<String>, stdout: &str, exit_status: i32) -> Self {
        self.responses.insert(
            command.into(),
            Response::Output(CommandResult::new(stdout, "", exit_status)),
        );
        self
    }

    fn malformed(mut self, command: impl Into<String>) -> Self {
        self.responses.insert(command.into(), Response::Malformed);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Backend for ScriptedBackend {
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
        self.calls.lock().unwrap().push(command.to_string());
        match self.responses.get(command) {
            Some(Response::Output(res)) => Ok(res.clone()),
            Some(Response::Malformed) => Err(FileError::MalformedResult {
                command: command.to_string(),
            }),
            None => Err(FileError::Command {
                command: command.to_string(),
                reason: "unscripted".into(),
            }),
        }
    }
}

/// Backend whose transport is down.
struct DeadBackend;

impl Backend for DeadBackend {
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
        Err(FileError::Command {
            command: command.to_string(),
            reason: "connection refused".into(),
        })
    }
}

fn gnu_stat(path: &str, follow: bool) -> String {
    StatDialect::Gnu.command(&format!("'{path}'"), follow)
}

const GNU_FILE: &str = "158\n81a4\nroot\n0\nroot\n0\n1700000000\n1690000000\n?";
const GNU_EXEC: &str = "2906824\n81ed\nroot\n0\nroot\n0\n1700000000\n1690000000\nsystem_u:object_r:bin_t:s0";
const GNU_LINK: &str = "12\na1ff\nroot\n0\nroot\n0\n1700000000\n1690000000\nsystem_u:object_r:bin_t:s0";
const GNU_DIR: &str = "4096\n41ed\nroot\n0\nroot\n0\n1700000000\n1690000000\n?";
const GNU_EMPTY: &str = "0\n81a4\nalice\n1000\nusers\n100\n1700000000\n1690000000\n?";

// =============================================================================
// Checksums
// =============================================================================

#[test]
fn md5sum_of_empty_file() {
    let backend = Arc::new(
        ScriptedBackend::new().on("md5sum /tmp/empty", "d41d8cd98f00b204e9800998ecf8427e  -\n", 0),
    );
    let file = LinuxFile::new(backend.clone(), "/tmp/empty", true);

    let sum = file.md5sum().unwrap();
    assert_eq!(sum, "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(sum.len(), 32);
    assert_eq!(backend.calls(), vec!["md5sum /tmp/empty".to_string()]);
}

#[test]
fn md5sum_of_missing_path_is_none() {
    let backend = Arc::new(ScriptedBackend::new().on("md5sum /nope", "", 1));
    let file = UnixFile::new(backend, "/nope", true);
    assert_eq!(file.md5sum(), None);
}

#[test]
fn checksums_swallow_malformed_results() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .malformed("md5sum /x")
            .malformed("sha256sum /x"),
    );
    let file = LinuxFile::new(backend, "/x", false);
    assert_eq!(file.md5sum(), None);
    assert_eq!(file.sha256sum(), None);
}

#[test]
fn sha256sum_takes_64_characters() {
    let backend = Arc::new(ScriptedBackend::new().on(
        "sha256sum /tmp/empty",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855  /tmp/empty\n",
        0,
    ));
    let file = LinuxFile::new(backend, "/tmp/empty", true);
    assert_eq!(
        file.sha256sum().as_deref(),
        Some("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
}

#[test]
fn dead_backend_fails_primitives_but_not_checksums() {
    let file = LinuxFile::new(Arc::new(DeadBackend), "/etc/hosts", true);
    assert!(matches!(file.exists(), Err(FileError::Command { .. })));
    assert!(matches!(file.mode(), Err(FileError::Command { .. })));
    assert!(matches!(file.serialize(), Err(FileError::Command { .. })));
    assert_eq!(file.md5sum(), None);
    assert_eq!(file.sha256sum(), None);
}

// =============================================================================
// Symlinks
// =============================================================================

fn vi_backend() -> Arc<ScriptedBackend> {
    Arc::new(
        ScriptedBackend::new()
            .on(gnu_stat("/usr/bin/vi", true), GNU_EXEC, 0)
            .on(gnu_stat("/usr/bin/vi", false), GNU_LINK, 0)
            .on("readlink -n '/usr/bin/vi' -f", "/usr/bin/vim.basic", 0)
            .on("readlink '/usr/bin/vi'", "/etc/alternatives/vi\n", 0),
    )
}

#[test]
fn symlink_views_of_a_link_to_a_file() {
    let backend = vi_backend();
    let followed = LinuxFile::new(backend.clone(), "/usr/bin/vi", true);
    let raw = LinuxFile::new(backend, "/usr/bin/vi", false);

    assert_eq!(raw.file_type().unwrap(), FileType::Symlink);
    assert_eq!(followed.file_type().unwrap(), FileType::File);

    assert!(followed.is_symlink().unwrap());
    assert!(raw.is_symlink().unwrap());
    assert!(!followed.is_directory().unwrap());
    assert!(!raw.is_directory().unwrap());
    assert!(followed.is_file().unwrap());
    assert!(!raw.is_file().unwrap());
}

#[test]
fn path_resolves_followed_symlinks_only() {
    let backend = vi_backend();
    let followed = LinuxFile::new(backend.clone(), "/usr/bin/vi", true);
    let raw = LinuxFile::new(backend, "/usr/bin/vi", false);

    assert_eq!(followed.path().unwrap(), "/usr/bin/vim.basic");
    assert_eq!(followed.source_path(), "/usr/bin/vi");
    assert_eq!(raw.path().unwrap(), "/usr/bin/vi");
}

#[test]
fn source_is_the_unresolved_view() {
    let backend = vi_backend();
    let followed = LinuxFile::new(backend, "/usr/bin/vi", true);

    let source = followed.source();
    assert!(!source.follows_symlink());
    assert_eq!(source.source_path(), "/usr/bin/vi");
    assert_eq!(source.file_type().unwrap(), FileType::Symlink);

    let again = source.source();
    assert!(!again.follows_symlink());
    assert_eq!(again.source_path(), source.source_path());
}

#[test]
fn unix_link_helpers() {
    let backend = vi_backend();
    let followed = LinuxFile::new(backend, "/usr/bin/vi", true);
    let unix = followed.as_unix();

    assert_eq!(
        unix.shallow_link_path().unwrap().as_deref(),
        Some("/etc/alternatives/vi")
    );
    assert!(unix.linked_to("/usr/bin/vim.basic").unwrap());
    assert!(!unix.linked_to("/usr/bin/nano").unwrap());
}

#[test]
fn plain_file_path_is_raw_path_either_way() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on(gnu_stat("/etc/hosts", true), GNU_FILE, 0)
            .on(gnu_stat("/etc/hosts", false), GNU_FILE, 0),
    );
    for follow in [true, false] {
        let file = LinuxFile::new(backend.clone(), "/etc/hosts", follow);
        assert!(!file.is_symlink().unwrap());
        assert_eq!(file.path().unwrap(), "/etc/hosts");
    }
}

// =============================================================================
// Unix / Linux attributes
// =============================================================================

#[test]
fn linux_stat_attributes() {
    let backend = Arc::new(ScriptedBackend::new().on(gnu_stat("/usr/bin/vi", true), GNU_EXEC, 1));
    let file = LinuxFile::new(backend, "/usr/bin/vi", true);

    assert_eq!(file.mode().unwrap(), Some(Mode::from_bits(0o755)));
    assert_eq!(file.owner().unwrap().as_deref(), Some("root"));
    assert_eq!(file.group().unwrap().as_deref(), Some("root"));
    assert_eq!(file.uid().unwrap(), Some(0));
    assert_eq!(file.gid().unwrap(), Some(0));
    assert_eq!(file.mtime().unwrap(), Some(1_690_000_000));
    assert_eq!(file.size().unwrap(), Some(2_906_824));
    assert_eq!(
        file.selinux_label().unwrap().as_deref(),
        Some("system_u:object_r:bin_t:s0")
    );
    assert!(file.owned_by("root").unwrap());
    assert!(!file.owned_by("alice").unwrap());
    assert!(file.as_unix().has_mode(0o755).unwrap());
    assert!(file.as_unix().grouped_into("root").unwrap());
}

#[test]
fn missing_path_has_no_stat_data() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on(gnu_stat("/gone", true), "", 1)
            .on("test -e '/gone'", "", 1),
    );
    let file = UnixFile::new(backend, "/gone", true);
    assert!(!file.exists().unwrap());
    assert_eq!(file.file_type().unwrap(), FileType::Unknown);
    assert_eq!(file.mode().unwrap(), None);
    assert_eq!(file.owner().unwrap(), None);
    assert_eq!(file.content().unwrap(), None);
}

#[test]
fn unresolved_exists_also_accepts_dangling_links() {
    let backend = Arc::new(ScriptedBackend::new().on(
        "test -e '/tmp/dangling' || test -L '/tmp/dangling'",
        "",
        0,
    ));
    let file = UnixFile::new(backend.clone(), "/tmp/dangling", false);
    assert!(file.exists().unwrap());
    assert_eq!(
        backend.calls(),
        vec!["test -e '/tmp/dangling' || test -L '/tmp/dangling'".to_string()]
    );
}

#[test]
fn unix_content_rules() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on("test -e '/srv'", "", 0)
            .on(gnu_stat("/srv", true), GNU_DIR, 0)
            .on("test -e '/tmp/empty'", "", 0)
            .on(gnu_stat("/tmp/empty", true), GNU_EMPTY, 0)
            .on("test -e '/etc/hosts'", "", 0)
            .on(gnu_stat("/etc/hosts", true), GNU_FILE, 0)
            .on("cat '/etc/hosts'", "127.0.0.1 localhost\n", 0),
    );

    let dir = UnixFile::new(backend.clone(), "/srv", true);
    assert_eq!(dir.content().unwrap(), None);

    let empty = UnixFile::new(backend.clone(), "/tmp/empty", true);
    assert_eq!(empty.content().unwrap().as_deref(), Some(""));
    assert!(!backend.calls().iter().any(|c| c == "cat '/tmp/empty'"));

    let hosts = UnixFile::new(backend, "/etc/hosts", true);
    assert_eq!(
        hosts.content().unwrap().as_deref(),
        Some("127.0.0.1 localhost\n")
    );
}

#[test]
fn linux_content_falls_back_on_empty_read() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on("cat '/etc/hosts' || echo -n", "127.0.0.1 localhost\n", 0)
            .on("cat '/tmp/empty' || echo -n", "", 0)
            .on(gnu_stat("/tmp/empty", true), GNU_EMPTY, 0)
            .on("cat '/root/secret' || echo -n", "", 0)
            .on(gnu_stat("/root/secret", true), GNU_FILE, 0)
            .on("cat '/srv' || echo -n", "", 0)
            .on(gnu_stat("/srv", true), GNU_DIR, 0),
    );

    let hosts = LinuxFile::new(backend.clone(), "/etc/hosts", true);
    assert_eq!(
        hosts.content().unwrap().as_deref(),
        Some("127.0.0.1 localhost\n")
    );

    let empty = LinuxFile::new(backend.clone(), "/tmp/empty", true);
    assert_eq!(empty.content().unwrap().as_deref(), Some(""));

    // non-empty file whose read produced nothing (no permission)
    let secret = LinuxFile::new(backend.clone(), "/root/secret", true);
    assert_eq!(secret.content().unwrap(), None);

    let dir = LinuxFile::new(backend, "/srv", true);
    assert_eq!(dir.content().unwrap(), None);
}

#[test]
fn bsd_family_uses_bsd_stat() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on("test -e '/etc/hosts' || test -L '/etc/hosts'", "", 0)
            .on(
                StatDialect::Bsd.command("'/etc/hosts'", false),
                "1024\n100644\nroot\n0\nwheel\n0\n1700000000\n1700000500\n",
                0,
            ),
    );
    let file = open_file(OsFamily::Bsd, backend, "/etc/hosts", false);

    assert!(file.exists().unwrap());
    assert!(file.is_file().unwrap());
    assert_eq!(file.mode().unwrap(), Some(Mode::from_bits(0o644)));
    assert_eq!(file.group().unwrap().as_deref(), Some("wheel"));
    assert_eq!(file.mtime().unwrap(), Some(1_700_000_500));
    assert_eq!(file.selinux_label().unwrap(), None);
}

// =============================================================================
// Serialization
// =============================================================================

fn hosts_backend() -> Arc<ScriptedBackend> {
    Arc::new(
        ScriptedBackend::new()
            .on("test -e '/etc/hosts'", "", 0)
            .on(gnu_stat("/etc/hosts", true), GNU_FILE, 0)
            .on(gnu_stat("/etc/hosts", false), GNU_FILE, 0)
            .on("cat '/etc/hosts' || echo -n", "127.0.0.1 localhost\n", 0),
    )
}

#[test]
fn serialize_keeps_missing_selinux_label() {
    let file = LinuxFile::new(hosts_backend(), "/etc/hosts", true);
    let attrs = file.serialize().unwrap();

    assert_eq!(
        attrs,
        FileAttributes {
            exists: true,
            mode: Some(Mode::from_bits(0o644)),
            owner: Some("root".into()),
            group: Some("root".into()),
            uid: Some(0),
            gid: Some(0),
            content: Some("127.0.0.1 localhost\n".into()),
            mtime: Some(1_690_000_000),
            size: Some(158),
            selinux_label: None,
            path: "/etc/hosts".into(),
            file_type: FileType::File,
            follow_symlink: true,
        }
    );
}

#[test]
fn serialize_queries_in_declared_order() {
    let backend = hosts_backend();
    let file = LinuxFile::new(backend.clone(), "/etc/hosts", true);
    file.serialize().unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0], "test -e '/etc/hosts'");
    assert_eq!(calls[1], gnu_stat("/etc/hosts", true));
    let cat = calls
        .iter()
        .position(|c| c == "cat '/etc/hosts' || echo -n")
        .unwrap();
    // mode, owner, group, uid, gid come before content
    assert_eq!(cat, 6);
}

#[cfg(feature = "serde")]
#[test]
fn json_has_every_key_with_nulls() {
    let file = LinuxFile::new(hosts_backend(), "/etc/hosts", true);
    let json = file.to_json().unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = FileAttributes::KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);

    assert!(object["selinuxLabel"].is_null());
    assert_eq!(object["exist?"], true);
    assert_eq!(object["type"], "file");
    assert_eq!(object["size"], 158);
}

#[test]
fn serialize_aborts_on_first_missing_attribute() {
    let backend = Arc::new(ScriptedBackend::new().on("test -e '/etc/hosts'", "", 0));
    let file = QnxFile::new(backend.clone(), "/etc/hosts", true);

    match file.serialize() {
        Err(FileError::NotImplemented { attribute, .. }) => assert_eq!(attribute, "mode"),
        other => panic!("expected NotImplemented, got {other:?}"),
    }
    assert_eq!(backend.calls(), vec!["test -e '/etc/hosts'".to_string()]);
}

// =============================================================================
// QNX
// =============================================================================

#[test]
fn qnx_partial_support() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on("file '/etc/hosts'", "/etc/hosts: ASCII text\n", 0)
            .on("file '/etc'", "/etc: directory\n", 0)
            .on("cat '/etc/hosts'", "127.0.0.1 localhost\n", 0)
            .on("cat '/etc/missing'", "", 1)
            .on("mount | grep -- ' on /etc '", "/dev/hd0 on /etc type qnx6\n", 0),
    );
    let hosts = QnxFile::new(backend.clone(), "/etc/hosts", true);
    let etc = QnxFile::new(backend.clone(), "/etc", true);

    assert_eq!(hosts.file_type().unwrap(), FileType::File);
    assert!(etc.is_directory().unwrap());
    assert!(!hosts.is_symlink().unwrap());
    assert_eq!(hosts.path().unwrap(), "/etc/hosts");
    assert_eq!(
        hosts.content().unwrap().as_deref(),
        Some("127.0.0.1 localhost\n")
    );

    let err = hosts.mode().unwrap_err();
    assert_eq!(err.to_string(), "QNX does not implement the mode() attribute");
    assert!(hosts.link_path().unwrap_err().is_not_implemented());

    // no mount capability, whatever the target would say
    assert!(!etc.is_mounted().unwrap());
    assert!(!backend.calls().iter().any(|c| c.starts_with("mount")));
}

#[test]
fn qnx_content_is_one_round_trip() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on("cat '/etc/hosts'", "127.0.0.1 localhost\n", 0)
            .on("cat '/tmp/empty'", "", 0)
            .on("cat '/etc/missing'", "", 1),
    );
    let content = |path: &str| QnxFile::new(backend.clone(), path, true).content().unwrap();

    assert_eq!(content("/etc/hosts").as_deref(), Some("127.0.0.1 localhost\n"));
    assert_eq!(content("/tmp/empty").as_deref(), Some(""));
    assert_eq!(content("/etc/missing"), None);
    assert_eq!(
        backend.calls(),
        vec!["cat '/etc/hosts'", "cat '/tmp/empty'", "cat '/etc/missing'"]
    );
}

// =============================================================================
// Mount detection
// =============================================================================

#[test]
fn linux_mount_detection() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on(
                "mount | grep -- ' on /boot '",
                "/dev/sda1 on /boot type ext4 (rw,relatime)\n",
                0,
            )
            .on("mount | grep -- ' on /srv '", "", 1),
    );
    assert!(LinuxFile::new(backend.clone(), "/boot", true).is_mounted().unwrap());
    assert!(!LinuxFile::new(backend, "/srv", true).is_mounted().unwrap());
}

#[test]
fn mount_query_failure_propagates() {
    let file = UnixFile::new(Arc::new(DeadBackend), "/boot", true);
    assert!(matches!(file.is_mounted(), Err(FileError::Command { .. })));
}

// =============================================================================
// Windows
// =============================================================================

const NOTEPAD: &str = r"C:\Windows\notepad.exe";

fn notepad_backend() -> Arc<ScriptedBackend> {
    Arc::new(
        ScriptedBackend::new()
            .on(format!("(Test-Path -Path \"{NOTEPAD}\").ToString()"), "True\r\n", 0)
            .on(
                format!("(Get-ItemProperty -Path \"{NOTEPAD}\").attributes.ToString()"),
                "Archive\r\n",
                0,
            )
            .on(format!("((Get-Item '{NOTEPAD}').Length)"), "201216\r\n", 0)
            .on(
                format!("Get-Acl \"{NOTEPAD}\" | select -expand Owner"),
                "NT SERVICE\\TrustedInstaller\r\n",
                0,
            )
            .on(format!("Get-Content(\"{NOTEPAD}\") | Out-String"), "MZ\r\n", 0)
            .on(
                format!(
                    "[System.Diagnostics.FileVersionInfo]::GetVersionInfo(\"{NOTEPAD}\").ProductVersion"
                ),
                "10.0.19041.1\r\n",
                0,
            )
            .on(
                format!(
                    "[System.Diagnostics.FileVersionInfo]::GetVersionInfo(\"{NOTEPAD}\").FileVersion"
                ),
                "10.0.19041.1 (WinBuild.160101.0800)\r\n",
                0,
            ),
    )
}

#[test]
fn windows_attributes() {
    let file = WindowsFile::new(notepad_backend(), NOTEPAD, true);

    assert!(file.exists().unwrap());
    assert!(file.is_file().unwrap());
    assert!(!file.is_symlink().unwrap());
    assert_eq!(file.size().unwrap(), Some(201_216));
    assert_eq!(
        file.owner().unwrap().as_deref(),
        Some("NT SERVICE\\TrustedInstaller")
    );
    assert_eq!(file.mode().unwrap(), None);
    assert_eq!(file.uid().unwrap(), None);
    assert_eq!(file.mtime().unwrap(), None);
    assert_eq!(file.path().unwrap(), NOTEPAD);
    assert!(!file.is_mounted().unwrap());
}

#[test]
fn windows_versions() {
    let file = WindowsFile::new(notepad_backend(), NOTEPAD, true);

    assert_eq!(file.product_version().unwrap().as_deref(), Some("10.0.19041.1"));
    assert!(file.is_version("10.0.19041.1").unwrap());
    assert!(file.is_version("10.0.19041.1 (WinBuild.160101.0800)").unwrap());
    assert!(!file.is_version("6.1").unwrap());
}

#[test]
fn windows_serializes() {
    let attrs = WindowsFile::new(notepad_backend(), NOTEPAD, true)
        .serialize()
        .unwrap();
    assert!(attrs.exists);
    assert_eq!(attrs.file_type, FileType::File);
    assert_eq!(attrs.size, Some(201_216));
    assert_eq!(attrs.content.as_deref(), Some("MZ\r\n"));
    assert_eq!(attrs.group, None);
    assert_eq!(attrs.selinux_label, None);
}

#[test]
fn windows_directory_and_reparse_point() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .on(
                "(Get-ItemProperty -Path \"C:\\Users\").attributes.ToString()",
                "ReadOnly, Directory\r\n",
                0,
            )
            .on("Get-Content(\"C:\\Users\") | Out-String", "", 1)
            .on(
                "(Get-ItemProperty -Path \"C:\\Docs\").attributes.ToString()",
                "Directory, ReparsePoint\r\n",
                0,
            ),
    );
    let users = WindowsFile::new(backend.clone(), r"C:\Users", true);
    assert!(users.is_directory().unwrap());
    assert_eq!(users.size().unwrap(), None);
    assert_eq!(users.content().unwrap(), None);

    let docs = WindowsFile::new(backend, r"C:\Docs", true);
    assert!(docs.is_symlink().unwrap());
    // no link target on Windows: the raw path stands in
    assert_eq!(docs.path().unwrap(), r"C:\Docs");
}

#[test]
fn versions_are_absent_off_windows() {
    let file = LinuxFile::new(Arc::new(DeadBackend), "/bin/ls", true);
    assert_eq!(file.product_version().unwrap(), None);
    assert_eq!(file.file_version().unwrap(), None);
    assert!(!file.is_version("1.0").unwrap());
}

// =============================================================================
// Layers, factory and sharing
// =============================================================================

#[test]
fn tracing_layer_is_transparent_to_files() {
    let scripted = ScriptedBackend::new().on(
        "md5sum /tmp/empty",
        "d41d8cd98f00b204e9800998ecf8427e  /tmp/empty\n",
        0,
    );
    let backend: Arc<dyn Backend> = Arc::new(scripted.layer(TracingLayer::new("test")));
    let file = open_file(OsFamily::Linux, backend, "/tmp/empty", true);
    assert_eq!(
        file.md5sum().as_deref(),
        Some("d41d8cd98f00b204e9800998ecf8427e")
    );
}

#[test]
fn unknown_family_fails_every_primitive() {
    let file = open_file(OsFamily::Unknown, Arc::new(DeadBackend), "/x", true);
    for err in [
        file.exists().unwrap_err(),
        file.size().unwrap_err(),
        file.content().unwrap_err(),
        file.file_type().unwrap_err(),
    ] {
        assert!(err.is_not_implemented(), "{err}");
    }
}

#[test]
fn backend_is_shared_across_threads() {
    let backend = Arc::new(ScriptedBackend::new().on(
        "md5sum /tmp/empty",
        "d41d8cd98f00b204e9800998ecf8427e  -\n",
        0,
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let backend: Arc<dyn Backend> = backend.clone();
            std::thread::spawn(move || LinuxFile::new(backend, "/tmp/empty", true).md5sum())
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap().as_deref(),
            Some("d41d8cd98f00b204e9800998ecf8427e")
        );
    }
    assert_eq!(backend.calls().len(), 4);
}

#[test]
fn empty_path_is_allowed() {
    let backend = Arc::new(ScriptedBackend::new().on("md5sum ", "", 1));
    let file = UnixFile::new(backend, "", false);
    assert_eq!(file.source_path(), "");
    assert_eq!(file.quoted_path(), "''");
    assert_eq!(file.path().unwrap(), "");
    assert_eq!(file.md5sum(), None);
}
