//! # Todo Persistence
//!
//! Reads and writes the todo list as a flat sequence of fixed-width records.
//!
//! ```text
//! offset  size  field
//! 0       50    title       UTF-8, NUL padded, at most 49 bytes of text
//! 50      20    created_at  UTF-8, NUL padded, at most 19 bytes of text
//! 70      1     completed   0 = pending, anything else = done
//! ```
//!
//! There are no delimiters or length prefixes: `file_len / RECORD_SIZE` is the
//! record count and a trailing partial record is ignored. Saves truncate and
//! rewrite the whole file.
//!
//! Loading reads at most `capacity` records from the front of the file and
//! never buffers more than one record at a time. A record whose title is
//! empty cannot come from `TodoList::add`, so it is skipped; it still uses up
//! one of the `capacity` reads. A file containing such records therefore
//! loads fewer than `file_len / RECORD_SIZE` todos.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::todo::{TodoList, TodoRecord};

pub const TITLE_FIELD: usize = 50;
pub const CREATED_AT_FIELD: usize = 20;
pub const RECORD_SIZE: usize = TITLE_FIELD + CREATED_AT_FIELD + 1;

/// What `Store::load` found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No backing file yet: first run.
    Missing,
    /// The file existed; `loaded` records were kept.
    Loaded { loaded: usize },
}

/// Codec between a `TodoList` and its backing file. Holds only the path.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads at most `capacity` records, in file order.
    ///
    /// A missing file is not an error. Bytes past the last complete record are
    /// ignored, as are records beyond `capacity`.
    pub fn load(&self, capacity: usize) -> io::Result<(TodoList, LoadOutcome)> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No todo file at {}, starting empty", self.path.display());
                return Ok((TodoList::with_capacity(capacity), LoadOutcome::Missing));
            }
            Err(e) => return Err(e),
        };

        let file_len = file.metadata()?.len();
        let list = read_list(file, capacity)?;

        let record_size = RECORD_SIZE as u64;
        if file_len % record_size != 0 {
            warn!(
                "Ignoring {} trailing bytes of a partial record",
                file_len % record_size
            );
        }
        if file_len / record_size > list.capacity() as u64 {
            warn!(
                "Todo file holds {} records, only the first {} were read",
                file_len / record_size,
                list.capacity()
            );
        }
        info!(
            "Loaded {} todos from {} ({} bytes)",
            list.len(),
            self.path.display(),
            file_len
        );
        let loaded = list.len();
        Ok((list, LoadOutcome::Loaded { loaded }))
    }

    /// Replaces the file contents with every record in `list`, in order.
    pub fn save(&self, list: &TodoList) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encode_list(list))?;
        debug!("Saved {} todos to {}", list.len(), self.path.display());
        Ok(())
    }
}

/// Serializes all records back to back.
pub fn encode_list(list: &TodoList) -> Vec<u8> {
    let mut out = Vec::with_capacity(list.len() * RECORD_SIZE);
    for record in list.list() {
        out.extend_from_slice(&encode_record(record));
    }
    out
}

/// Reads up to `capacity` complete records from `reader`, one at a time.
///
/// Stops at end of input, dropping a trailing partial record, and never
/// consumes more than `capacity * RECORD_SIZE` bytes.
pub fn read_list(reader: impl Read, capacity: usize) -> io::Result<TodoList> {
    let mut list = TodoList::with_capacity(capacity);
    let limit = (list.capacity() * RECORD_SIZE) as u64;
    let mut reader = reader.take(limit);
    let mut buf = [0u8; RECORD_SIZE];

    for index in 0..list.capacity() {
        match reader.read_exact(&mut buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
        match decode_record(&buf) {
            Some(record) => {
                list.push_loaded(record);
            }
            None => warn!("Skipping record {} with an empty title", index + 1),
        }
    }
    Ok(list)
}

pub fn encode_record(record: &TodoRecord) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    write_field(&mut buf[..TITLE_FIELD], &record.title);
    write_field(
        &mut buf[TITLE_FIELD..TITLE_FIELD + CREATED_AT_FIELD],
        &record.created_at,
    );
    buf[RECORD_SIZE - 1] = u8::from(record.completed);
    buf
}

/// Decodes one record; `None` if `bytes` is short or the title is empty.
pub fn decode_record(bytes: &[u8]) -> Option<TodoRecord> {
    if bytes.len() < RECORD_SIZE {
        return None;
    }
    let title = read_field(&bytes[..TITLE_FIELD]);
    if title.trim().is_empty() {
        return None;
    }
    Some(TodoRecord {
        title,
        created_at: read_field(&bytes[TITLE_FIELD..TITLE_FIELD + CREATED_AT_FIELD]),
        completed: bytes[RECORD_SIZE - 1] != 0,
    })
}

/// Copies `text` into `field`, leaving room for at least one NUL.
fn write_field(field: &mut [u8], text: &str) {
    let mut end = text.len().min(field.len() - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    field[..end].copy_from_slice(&text.as_bytes()[..end]);
}

fn read_field(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{list_with, record};
    use std::io::Cursor;

    fn decode(bytes: &[u8], capacity: usize) -> TodoList {
        read_list(bytes, capacity).unwrap()
    }

    #[test]
    fn test_record_layout() {
        let mut rec = record("Buy milk");
        rec.completed = true;
        let bytes = encode_record(&rec);

        assert_eq!(bytes.len(), 71);
        assert_eq!(&bytes[..8], b"Buy milk");
        assert!(bytes[8..TITLE_FIELD].iter().all(|&b| b == 0));
        assert_eq!(&bytes[TITLE_FIELD..TITLE_FIELD + 11], b"25/12 14:05");
        assert_eq!(bytes[70], 1);
    }

    #[test]
    fn test_full_width_title_keeps_terminator() {
        let rec = record(&"t".repeat(TITLE_FIELD + 10));
        let bytes = encode_record(&rec);
        assert_eq!(bytes[TITLE_FIELD - 1], 0);
        assert_eq!(decode_record(&bytes).unwrap().title.len(), TITLE_FIELD - 1);
    }

    #[test]
    fn test_read_list_ignores_trailing_partial_record() {
        let list = list_with(&["a", "b", "c"]);
        let mut bytes = encode_list(&list);
        bytes.truncate(2 * RECORD_SIZE + 30);

        let decoded = decode(&bytes, 20);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.list(), &list.list()[..2]);
    }

    #[test]
    fn test_read_list_shorter_than_one_record() {
        assert!(decode(&[1, 2, 3], 20).is_empty());
        assert!(decode(&[], 20).is_empty());
    }

    #[test]
    fn test_read_list_keeps_first_records_up_to_capacity() {
        let list = list_with(&["a", "b", "c", "d"]);
        let decoded = decode(&encode_list(&list), 2);
        let titles: Vec<_> = decoded.list().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[test]
    fn test_read_list_consumes_only_the_capped_prefix() {
        let mut bytes = encode_list(&list_with(&["a", "b", "c", "d"]));
        bytes.extend(std::iter::repeat_n(0xaa, 100 * RECORD_SIZE));
        let mut cursor = Cursor::new(bytes);

        let list = read_list(&mut cursor, 3).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(cursor.position(), (3 * RECORD_SIZE) as u64);
    }

    #[test]
    fn test_empty_title_record_uses_a_read_slot() {
        let mut bytes = [0u8; RECORD_SIZE].to_vec();
        bytes.extend(encode_list(&list_with(&["a", "b"])));

        let titles: Vec<_> = decode(&bytes, 2)
            .list()
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles, ["a"]);
    }

    #[test]
    fn test_load_oversized_file_keeps_first_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.dat");
        let mut bytes = encode_list(&list_with(&["first"]));
        bytes.extend(std::iter::repeat_n(0xaa, 1000 * RECORD_SIZE + 13));
        fs::write(&path, bytes).unwrap();

        let (list, outcome) = Store::new(&path).load(20).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded { loaded: 20 });
        assert_eq!(list.list()[0].title, "first");
    }

    #[test]
    fn test_nonzero_flag_decodes_as_completed() {
        let mut bytes = encode_record(&record("x"));
        bytes[RECORD_SIZE - 1] = 0xff;
        assert!(decode_record(&bytes).unwrap().completed);
    }

    #[test]
    fn test_empty_title_record_is_skipped() {
        let mut bytes = encode_list(&list_with(&["keep"]));
        bytes.extend_from_slice(&[0u8; RECORD_SIZE]);
        let decoded = decode(&bytes, 20);
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0] = b'o';
        bytes[1] = b'k';
        bytes[2] = 0xff;
        let rec = decode_record(&bytes).unwrap();
        assert!(rec.title.starts_with("ok"));
        assert!(rec.title.contains('\u{fffd}'));
    }

    #[test]
    fn test_load_missing_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("todos.dat"));
        let (list, outcome) = store.load(20).unwrap();
        assert!(list.is_empty());
        assert_eq!(outcome, LoadOutcome::Missing);
        assert_eq!(list.capacity(), 20);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("todos.dat"));
        store.save(&list_with(&["a"])).unwrap();
        assert_eq!(fs::metadata(store.path()).unwrap().len(), RECORD_SIZE as u64);
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be
        let store = Store::new(dir.path());
        assert!(store.save(&list_with(&["a"])).is_err());
    }
}
