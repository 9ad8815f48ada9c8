pub mod error;
pub mod logging;
pub mod run;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::RunnerError;

/// A parsed run document: the model `input`, the replicate metadata pulled
/// out of it, and where the `output` should go.
pub struct Environment<I = ()> {
    input_json: serde_json::Map<String, Value>,
    pub input: Option<I>,
    pub seed: u64,
    pub replicate: u64,
    output: Value,
}

impl Environment {
    pub fn from_json(data: Value) -> Self {
        let mut input_json = data
            .get("input")
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_default();

        let seed = input_json
            .remove("seed")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        let replicate = input_json
            .remove("replicate")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        let output = data.get("output").cloned().unwrap_or(Value::Null);

        Self {
            input_json,
            input: None,
            seed,
            replicate,
            output,
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, RunnerError> {
        let data: Value = toml::from_str(raw)?;
        Ok(Self::from_json(data))
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, RunnerError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Err("no run document on input".into());
        }
        let data: Value = serde_json::from_str(&raw)?;
        Ok(Self::from_json(data))
    }

    pub fn from_stdin() -> Result<Self, RunnerError> {
        Self::from_reader(io::stdin().lock())
    }

    /// Reads a run document from disk; `.toml` files are TOML, anything else JSON.
    pub fn from_path(path: &Path) -> Result<Self, RunnerError> {
        let raw = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&raw),
            _ => Self::from_reader(raw.as_bytes()),
        }
    }

    /// Uses the first command-line argument as a document path, falling back to stdin.
    pub fn from_args() -> Result<Self, RunnerError> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Self::from_stdin(),
        }
    }

    pub fn with_input_type<I: DeserializeOwned>(self) -> Result<Environment<I>, RunnerError> {
        let input_value = Value::Object(self.input_json.clone());
        let input = serde_json::from_value(input_value)?;
        Ok(Environment {
            input_json: self.input_json,
            input: Some(input),
            seed: self.seed,
            replicate: self.replicate,
            output: self.output,
        })
    }
}

impl<I: DeserializeOwned> Environment<I> {
    pub fn load() -> Result<Self, RunnerError> {
        Environment::from_args()?.with_input_type::<I>()
    }
}

impl<I> Environment<I> {
    pub fn input_json(&self) -> &serde_json::Map<String, Value> {
        &self.input_json
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        let output = &self.output;

        if output.get("spec").and_then(|v| v.as_str()) == Some("filesystem") {
            return output
                .get("dir")
                .and_then(|v| v.as_str())
                .map(PathBuf::from);
        }

        // Profiled output: "default" wins, otherwise the first profile listed
        let profile = output
            .get("profile")
            .and_then(|v| v.as_object())
            .and_then(|profiles| profiles.get("default").or_else(|| profiles.values().next()))?;
        if profile.get("spec").and_then(|v| v.as_str()) == Some("filesystem") {
            return profile
                .get("dir")
                .and_then(|v| v.as_str())
                .map(PathBuf::from);
        }

        None
    }

    fn create_output(&self, filename: &str) -> Result<Option<fs::File>, RunnerError> {
        match self.output_dir() {
            Some(dir) => {
                fs::create_dir_all(&dir)?;
                Ok(Some(fs::File::create(dir.join(filename))?))
            }
            None => Ok(None),
        }
    }

    pub fn write(&self, filename: &str, data: &[u8]) -> Result<(), RunnerError> {
        match self.create_output(filename)? {
            Some(mut file) => file.write_all(data)?,
            None => io::stdout().lock().write_all(data)?,
        }
        Ok(())
    }

    pub fn write_csv(
        &self,
        filename: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), RunnerError> {
        fn emit<W: Write>(
            mut wtr: csv::Writer<W>,
            headers: &[&str],
            rows: &[Vec<String>],
        ) -> Result<(), RunnerError> {
            wtr.write_record(headers)?;
            for row in rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
            Ok(())
        }

        match self.create_output(filename)? {
            Some(file) => emit(csv::Writer::from_writer(file), headers, rows),
            None => emit(csv::Writer::from_writer(io::stdout().lock()), headers, rows),
        }
    }

    /// Writes serializable rows as CSV, taking the header from the field names.
    pub fn write_records<T, R>(&self, filename: &str, records: R) -> Result<(), RunnerError>
    where
        T: Serialize,
        R: IntoIterator<Item = T>,
    {
        fn emit<W: Write, T: Serialize>(
            mut wtr: csv::Writer<W>,
            records: impl IntoIterator<Item = T>,
        ) -> Result<(), RunnerError> {
            for record in records {
                wtr.serialize(record)?;
            }
            wtr.flush()?;
            Ok(())
        }

        match self.create_output(filename)? {
            Some(file) => emit(csv::Writer::from_writer(file), records),
            None => emit(csv::Writer::from_writer(io::stdout().lock()), records),
        }
    }
}
