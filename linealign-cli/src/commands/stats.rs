//! Stats command implementation

use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use linealign_core::CorpusStats;
use std::path::PathBuf;

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Corpus files to summarize
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: Vec<PathBuf>,

    /// Only read the first LINES lines of each file
    #[arg(short, long, value_name = "LINES")]
    pub limit: Option<usize>,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> Result<()> {
        for (path, stats) in self.collect()? {
            println!("{} : {}", path.display(), stats);
        }
        Ok(())
    }

    /// Read every input and compute its summary
    pub fn collect(&self) -> Result<Vec<(PathBuf, CorpusStats)>> {
        self.input
            .iter()
            .map(|path| -> Result<(PathBuf, CorpusStats)> {
                let corpus = FileReader::read_corpus(path, self.limit)?;
                Ok((path.clone(), corpus.stats()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_stats_for_each_file() {
        let temp_dir = TempDir::new().unwrap();
        let english = temp_dir.path().join("english.txt");
        let russian = temp_dir.path().join("russian.txt");
        fs::write(&english, "the cat\nthe dog\n").unwrap();
        fs::write(&russian, "кошка\nсобака\nи кошка\n").unwrap();

        let args = StatsArgs {
            input: vec![english.clone(), russian.clone()],
            limit: None,
        };
        let stats = args.collect().unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].0, english);
        assert_eq!(
            stats[0].1,
            CorpusStats {
                lines: 2,
                words: 4,
                vocabulary: 3
            }
        );
        assert_eq!(
            stats[1].1,
            CorpusStats {
                lines: 3,
                words: 4,
                vocabulary: 3
            }
        );
    }

    #[test]
    fn test_limit_applies_to_every_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corpus.txt");
        fs::write(&path, "a\nb\nc\nd\n").unwrap();

        let args = StatsArgs {
            input: vec![path],
            limit: Some(3),
        };
        assert_eq!(args.collect().unwrap()[0].1.lines, 3);
    }

    #[test]
    fn test_missing_file_fails() {
        let args = StatsArgs {
            input: vec![PathBuf::from("/nonexistent/corpus.txt")],
            limit: None,
        };
        assert!(args.execute().is_err());
    }
}
