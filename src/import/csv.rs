//! Import from a simple csv format.
//!
//! Two files describe a problem: connections
//! (`origin,destination,minutes`) and jobs
//! (`id,origin,destination,deadline,value,bonus`), with deadlines as
//! `YYYY-MM-DD` calendar dates.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::distance::TravelTimes;
use crate::models::{Connection, Job, JobCatalog};

use super::ImportError;

#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    origin: String,
    destination: String,
    minutes: u32,
}

#[derive(Debug, Deserialize)]
struct JobRecord {
    id: String,
    origin: String,
    destination: String,
    deadline: NaiveDate,
    value: f64,
    bonus: f64,
}

fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, ImportError>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = ::csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for entry in reader.deserialize() {
        entries.push(entry?);
    }
    Ok(entries)
}

/// Reads connection records from headed CSV.
///
/// # Examples
///
/// ```
/// use u_dispatch::import::read_connections;
///
/// let data = "origin,destination,minutes\nA,B,10\nB,C,25\n";
/// let connections = read_connections(data.as_bytes()).unwrap();
/// assert_eq!(connections.len(), 2);
/// assert_eq!(connections[0].minutes(), 10);
/// ```
pub fn read_connections<R: Read>(reader: R) -> Result<Vec<Connection>, ImportError> {
    let records = read_csv_entries::<ConnectionRecord, _>(BufReader::new(reader))?;
    Ok(records
        .into_iter()
        .map(|r| Connection::new(r.origin, r.destination, r.minutes))
        .collect())
}

/// Reads job records from headed CSV.
///
/// # Examples
///
/// ```
/// use u_dispatch::import::read_jobs;
///
/// let data = "id,origin,destination,deadline,value,bonus\nJ1,A,B,2023-11-20,100.0,20.0\n";
/// let jobs = read_jobs(data.as_bytes()).unwrap();
/// assert_eq!(jobs[0].id(), "J1");
/// assert_eq!(jobs[0].profit(), 120.0);
/// ```
pub fn read_jobs<R: Read>(reader: R) -> Result<Vec<Job>, ImportError> {
    let records = read_csv_entries::<JobRecord, _>(BufReader::new(reader))?;
    Ok(records
        .into_iter()
        .map(|r| Job::new(r.id, r.origin, r.destination, r.deadline, r.value, r.bonus))
        .collect())
}

/// Reads a connections file and a jobs file into ready-to-use problem
/// structures.
pub fn load_problem(
    connections_path: &Path,
    jobs_path: &Path,
) -> Result<(TravelTimes, JobCatalog), ImportError> {
    let connections = read_connections(open(connections_path)?)?;
    info!(
        count = connections.len(),
        path = %connections_path.display(),
        "connections loaded"
    );

    let jobs = read_jobs(open(jobs_path)?)?;
    info!(count = jobs.len(), path = %jobs_path.display(), "jobs loaded");

    Ok((
        TravelTimes::from_connections(connections),
        JobCatalog::new(jobs),
    ))
}

fn open(path: &Path) -> Result<File, ImportError> {
    File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_connections() {
        let data = "origin,destination,minutes\nA,B,10\nB,C,25\n";
        let connections = read_connections(data.as_bytes()).expect("valid csv");
        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0], Connection::new("A", "B", 10));
        assert_eq!(connections[1], Connection::new("B", "C", 25));
    }

    #[test]
    fn test_read_jobs() {
        let data = "id,origin,destination,deadline,value,bonus\n\
                    J1,A,B,2023-11-20,100.0,20.0\n\
                    J2,B,C,2023-12-01,80.5,5.5\n";
        let jobs = read_jobs(data.as_bytes()).expect("valid csv");
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id(), "J1");
        assert_eq!(
            jobs[0].deadline(),
            NaiveDate::from_ymd_opt(2023, 11, 20).expect("valid date")
        );
        assert_eq!(jobs[1].value(), 80.5);
        assert_eq!(jobs[1].bonus(), 5.5);
    }

    #[test]
    fn test_read_connections_rejects_bad_minutes() {
        let data = "origin,destination,minutes\nA,B,fast\n";
        assert!(matches!(
            read_connections(data.as_bytes()),
            Err(ImportError::Csv(_))
        ));
    }

    #[test]
    fn test_read_jobs_rejects_bad_date() {
        let data = "id,origin,destination,deadline,value,bonus\nJ1,A,B,someday,100.0,20.0\n";
        assert!(matches!(read_jobs(data.as_bytes()), Err(ImportError::Csv(_))));
    }

    #[test]
    fn test_read_jobs_rejects_missing_column() {
        let data = "id,origin,destination,deadline,value\nJ1,A,B,2023-11-20,100.0\n";
        assert!(matches!(read_jobs(data.as_bytes()), Err(ImportError::Csv(_))));
    }

    #[test]
    fn test_empty_files_yield_empty_collections() {
        let connections = read_connections("origin,destination,minutes\n".as_bytes());
        assert!(connections.expect("valid csv").is_empty());
        let jobs = read_jobs("id,origin,destination,deadline,value,bonus\n".as_bytes());
        assert!(jobs.expect("valid csv").is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let missing = Path::new("definitely/not/here.csv");
        let result = load_problem(missing, missing);
        assert!(matches!(result, Err(ImportError::Open { .. })));
    }
}
