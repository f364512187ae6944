use super::Command;
use super::output::{format_outcome, format_suggestions};
use crate::config::Config;
use crate::error::Result;
use search_core::{DebouncedTask, Debouncer, RecentSearches, SiteSearch, TaskOutcome, Throttle};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Minimum gap between writes of the recent-searches file while typing
const SAVE_INTERVAL: Duration = Duration::from_secs(1);

/// Search as you type: every stdin line is the current content of the
/// search box, and only a line followed by a quiet period gets searched.
pub struct LiveCommand {
    config: Config,
}

impl LiveCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

type Pending = DebouncedTask<Option<String>>;

struct Session {
    recent: RecentSearches,
    throttle: Throttle,
}

impl Session {
    fn new(recent: RecentSearches, save_interval: Duration) -> Self {
        Self {
            recent,
            throttle: Throttle::new(save_interval),
        }
    }

    /// Feed input lines to the debounced search until the input ends or
    /// fails. Undecodable lines are skipped. The last line's search always
    /// runs, and the list is saved once more before returning.
    async fn run<R>(&mut self, mut reader: R, site: Arc<SiteSearch>, debouncer: &mut Debouncer)
    where
        R: AsyncBufRead + Unpin,
    {
        let mut pending: Option<Pending> = None;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("Reading input failed: {}", e);
                    break;
                }
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(['\n', '\r']).to_string(),
                Err(e) => {
                    tracing::warn!("Skipping input line that is not UTF-8: {}", e);
                    continue;
                }
            };

            let site = site.clone();
            let next = debouncer.call(move || async move {
                let outcome = site.search(&line);
                print!("{}", format_outcome(&outcome));
                outcome.query().map(str::to_string)
            });
            // The replaced search was aborted by `call` or has already run
            if let Some(previous) = pending.replace(next) {
                self.harvest(previous, false).await;
            }
        }

        if let Some(task) = pending.take() {
            self.harvest(task, true).await;
        }
    }

    /// Record the query of a finished search, saving at most once per interval
    async fn harvest(&mut self, task: Pending, force_save: bool) {
        match task.outcome().await {
            TaskOutcome::Completed(Some(query)) => {
                self.recent.record(&query);
                if force_save || self.throttle.try_acquire() {
                    self.save();
                }
            }
            TaskOutcome::Completed(None) | TaskOutcome::Cancelled => {
                if force_save {
                    self.save();
                }
            }
            TaskOutcome::Failed(e) => tracing::error!("Live search failed: {}", e),
        }
    }

    fn save(&self) {
        if let Err(e) = self.recent.save() {
            tracing::warn!("Could not save recent searches: {}", e);
        }
    }
}

#[async_trait::async_trait]
impl Command for LiveCommand {
    async fn execute(&self) -> Result<()> {
        let site = Arc::new(SiteSearch::new(
            self.config.load_index()?,
            self.config.search_options(),
        ));
        let recent = RecentSearches::load(
            self.config.recent_searches_path(),
            self.config.recent_limit,
        );
        if let Some(suggestions) = format_suggestions(&recent) {
            println!("{}", suggestions);
        }

        let mut session = Session::new(recent, SAVE_INTERVAL);
        let mut debouncer = Debouncer::new(self.config.debounce());
        session
            .run(BufReader::new(tokio::io::stdin()), site, &mut debouncer)
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;
    use tokio::io::AsyncWriteExt;

    fn stored(path: &Path) -> Vec<String> {
        RecentSearches::load(path, 6).suggestions().to_vec()
    }

    /// Write each chunk, then wait its pause, then close the input
    fn typed(input: Vec<(&'static [u8], u64)>) -> BufReader<tokio::io::DuplexStream> {
        let (mut writer, reader) = tokio::io::duplex(256);
        tokio::spawn(async move {
            for (bytes, pause_ms) in input {
                writer.write_all(bytes).await.unwrap();
                tokio::time::sleep(Duration::from_millis(pause_ms)).await;
            }
        });
        BufReader::new(reader)
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_line_is_skipped_and_last_search_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent.json");
        let mut session = Session::new(RecentSearches::new(path.clone(), 6), SAVE_INTERVAL);
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let input = BufReader::new(&b"morning\n\xff\xfe\n"[..]);
        session.run(input, Arc::new(SiteSearch::default()), &mut debouncer).await;

        assert_eq!(session.recent.suggestions(), ["morning"]);
        assert_eq!(stored(&path), ["morning"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_settled_lines_are_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent.json");
        let mut session = Session::new(RecentSearches::new(path.clone(), 6), SAVE_INTERVAL);
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let input = typed(vec![
            (&b"m\n"[..], 100),
            (&b"mo\n"[..], 100),
            (&b"morning\n"[..], 600),
            (&b"   \n"[..], 600),
            (&b"dua\r\n"[..], 0),
        ]);
        session.run(input, Arc::new(SiteSearch::default()), &mut debouncer).await;

        assert_eq!(stored(&path), ["dua", "morning"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_saves_are_throttled_until_forced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent.json");
        let mut session = Session::new(RecentSearches::new(path.clone(), 6), Duration::from_secs(3600));
        let mut debouncer = Debouncer::new(Duration::from_millis(10));

        session.harvest(debouncer.call(|| async { Some("dua".to_string()) }), false).await;
        assert_eq!(stored(&path), ["dua"]);

        session.harvest(debouncer.call(|| async { Some("hajj".to_string()) }), false).await;
        assert_eq!(session.recent.suggestions(), ["hajj", "dua"]);
        assert_eq!(stored(&path), ["dua"]);

        session.harvest(debouncer.call(|| async { None }), true).await;
        assert_eq!(stored(&path), ["hajj", "dua"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_search_is_not_recorded() {
        let mut session = Session::new(RecentSearches::new("unused.json", 6), SAVE_INTERVAL);
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let task = debouncer.call(|| async { Some("qibla".to_string()) });
        debouncer.cancel();
        session.harvest(task, false).await;
        assert!(session.recent.suggestions().is_empty());
    }
}
