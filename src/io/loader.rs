//! Process batch loader.
//!
//! # Format
//!
//! Whitespace-separated integer triples, one per process:
//!
//! ```text
//! pid arrival_time burst_time
//! ```
//!
//! No header and no delimiters beyond whitespace; line breaks carry no
//! meaning. Reading stops silently at the first token that is not an integer
//! or at an incomplete trailing triple, exactly as if the stream had ended.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, warn};

use crate::models::ProcessRecord;

/// Parses process triples from text.
///
/// # Example
///
/// ```
/// use u_procsched::io::parse_processes;
///
/// let batch = parse_processes("1 0 5\n2 1 3\n3 2 8 trailing");
/// assert_eq!(batch.len(), 3);
/// assert_eq!(batch[2].burst_time, 8);
/// ```
pub fn parse_processes(input: &str) -> Vec<ProcessRecord> {
    let mut tokens = input.split_whitespace();
    let mut processes = Vec::new();

    loop {
        let mut triple = [0i64; 3];
        for (slot, value) in triple.iter_mut().enumerate() {
            match tokens.next() {
                None => {
                    if slot > 0 {
                        debug!(
                            "Dropping incomplete trailing record after {} processes",
                            processes.len()
                        );
                    }
                    return processes;
                }
                Some(token) => match token.parse::<i64>() {
                    Ok(v) => *value = v,
                    Err(_) => {
                        warn!(
                            "Stopped reading at malformed token {:?} after {} processes",
                            token,
                            processes.len()
                        );
                        return processes;
                    }
                },
            }
        }

        let [pid, arrival, burst] = triple;
        processes.push(ProcessRecord::new(pid, arrival, burst));
    }
}

/// Reads a process batch from any reader.
pub fn read_processes<R: Read>(mut reader: R) -> io::Result<Vec<ProcessRecord>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(parse_processes(&contents))
}

/// Reads a process batch from a file.
pub fn load_processes(path: impl AsRef<Path>) -> io::Result<Vec<ProcessRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let processes = read_processes(file)?;
    debug!("Loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Reads a process batch from `path`, or from `stdin` when `path` is `-`.
pub fn load_input<R: Read>(path: &Path, stdin: R) -> io::Result<Vec<ProcessRecord>> {
    if path.as_os_str() == "-" {
        let processes = read_processes(stdin)?;
        debug!("Loaded {} processes from stdin", processes.len());
        Ok(processes)
    } else {
        load_processes(path)
    }
}
