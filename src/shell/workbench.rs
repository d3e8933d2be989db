//! Workbench
//!
//! Owns one table per collision method and routes commands to the active
//! one.

use tracing::info;

use crate::config::{Config, StrategyKind};
use crate::error::{HashLabError, Result};
use crate::hashing::HashSuite;
use crate::table::{ChainedTable, OpenTable};

use super::{Command, Method};

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Output(String),

    /// Leave the loop
    Quit,
}

/// All tables of a session plus the hash functions
pub struct Workbench {
    linear: OpenTable,
    quadratic: OpenTable,
    double: OpenTable,
    chained: ChainedTable,
    hashes: HashSuite,
    active: Method,
    capacity: usize,
}

impl Workbench {
    /// Build every table from a validated config
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let capacity = config.capacity;

        let workbench = Self {
            linear: OpenTable::new(capacity, config.strategy(StrategyKind::Linear))?,
            quadratic: OpenTable::new(capacity, config.strategy(StrategyKind::Quadratic))?,
            double: OpenTable::new(capacity, config.strategy(StrategyKind::DoubleHash))?,
            chained: ChainedTable::new(capacity)?,
            hashes: HashSuite::from_config(config)?,
            active: Method::Probing(config.default_strategy),
            capacity,
        };

        info!(capacity, active = ?workbench.active, "workbench ready");
        Ok(workbench)
    }

    /// Execute a command
    ///
    /// Table misses and collisions are reported in the output text; only
    /// unexpected failures surface as errors.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let text = match command {
            Command::Use { method } => {
                self.active = method;
                format!("Using {}", self.active_name())
            }
            Command::Insert { key } => match self.insert(key) {
                Ok(()) => format!("Key {} inserted successfully", key),
                Err(HashLabError::DuplicateKey { .. }) => {
                    format!("Insertion failed, key {} already exists", key)
                }
                Err(HashLabError::TableFull { .. }) => {
                    format!("Insertion failed, no free slot for key {}", key)
                }
                Err(e) => return Err(e),
            },
            Command::Search { key } => match self.search(key) {
                Ok(index) => format!("Key {} found at index {}", key, index),
                Err(HashLabError::NotFound { .. }) => format!("Key {} not found", key),
                Err(e) => return Err(e),
            },
            Command::Delete { key } => match self.delete(key) {
                Ok(()) => format!("Key {} deleted successfully", key),
                Err(HashLabError::NotFound { .. }) => format!("Key {} not found", key),
                Err(e) => return Err(e),
            },
            Command::Print => self.print(),
            Command::Probe { key } => match self.open_table() {
                Some(table) => {
                    let path: Vec<String> =
                        table.probe_path(key).iter().map(usize::to_string).collect();
                    format!("Probe path for {}: {}", key, path.join(" -> "))
                }
                None => "Chaining has no probe sequence".to_string(),
            },
            Command::Hash { method, key } => {
                let index = self.hashes.index(method, key, self.capacity);
                format!("Hash Index ({}): {}", method, index)
            }
            Command::Stats => self.stats(),
            Command::Help => HELP.trim_end().to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Output(text))
    }

    /// Collision method currently receiving commands
    pub fn active(&self) -> Method {
        self.active
    }

    /// Linear probing table
    pub fn linear(&self) -> &OpenTable {
        &self.linear
    }

    /// Quadratic probing table
    pub fn quadratic(&self) -> &OpenTable {
        &self.quadratic
    }

    /// Double hashing table
    pub fn double(&self) -> &OpenTable {
        &self.double
    }

    /// Separate-chaining table
    pub fn chained(&self) -> &ChainedTable {
        &self.chained
    }

    /// Hash functions of this session
    pub fn hashes(&self) -> &HashSuite {
        &self.hashes
    }

    // =========================================================================
    // Routing
    // =========================================================================

    fn insert(&mut self, key: i64) -> Result<()> {
        match self.open_table_mut() {
            Some(table) => table.insert(key),
            None => self.chained.insert(key),
        }
    }

    fn search(&self, key: i64) -> Result<usize> {
        match self.open_table() {
            Some(table) => table.search(key),
            None => self.chained.search(key),
        }
    }

    fn delete(&mut self, key: i64) -> Result<()> {
        match self.open_table_mut() {
            Some(table) => table.delete(key),
            None => self.chained.delete(key),
        }
    }

    fn print(&self) -> String {
        let body = match self.open_table() {
            Some(table) => table.to_string(),
            None => self.chained.to_string(),
        };
        format!("{} Hash Table:\n{}", self.active_name(), body.trim_end())
    }

    fn stats(&self) -> String {
        let mut lines = Vec::new();
        for table in [&self.linear, &self.quadratic, &self.double] {
            lines.push(format!(
                "{}: {} keys, {} tombstones, load {:.2}",
                table.strategy(),
                table.len(),
                table.tombstones(),
                table.load_factor()
            ));
        }
        lines.push(format!(
            "Chaining: {} keys, longest chain {}",
            self.chained.len(),
            self.chained.longest_chain()
        ));
        lines.join("\n")
    }

    fn active_name(&self) -> String {
        match self.open_table() {
            Some(table) => table.strategy().to_string(),
            None => "Chaining".to_string(),
        }
    }

    fn open_table(&self) -> Option<&OpenTable> {
        match self.active {
            Method::Probing(StrategyKind::Linear) => Some(&self.linear),
            Method::Probing(StrategyKind::Quadratic) => Some(&self.quadratic),
            Method::Probing(StrategyKind::DoubleHash) => Some(&self.double),
            Method::Chaining => None,
        }
    }

    fn open_table_mut(&mut self) -> Option<&mut OpenTable> {
        match self.active {
            Method::Probing(StrategyKind::Linear) => Some(&mut self.linear),
            Method::Probing(StrategyKind::Quadratic) => Some(&mut self.quadratic),
            Method::Probing(StrategyKind::DoubleHash) => Some(&mut self.double),
            Method::Chaining => None,
        }
    }
}

const HELP: &str = "\
Commands:
  use <linear|quadratic|double|chaining>   switch the active table
  insert <key>                             insert a key
  search <key>                             find a key
  delete <key>                             delete a key
  print                                    show every slot
  probe <key>                              show the probe path of a key
  hash <method> <key>                      division, mid-square, folding, multiplication, universal
  stats                                    occupancy of every table
  help                                     this text
  quit                                     leave
";
