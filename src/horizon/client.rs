use crate::config::HorizonConfig;
use crate::errors::{ResolveError, ResolveResult};
use crate::horizon::{calculate_next_backoff, execute_with_timeout};
use crate::inspector::AccountResolver;
use crate::types::AccountRecord;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Outcome of a failed attempt
enum AttemptError {
    /// Give up immediately (404, other client errors, undecodable body)
    Fatal(ResolveError),
    /// Worth another attempt (transport failure, 5xx, rate limiting)
    Retryable(ResolveError),
}

/// Horizon client that loads account state with retry logic
///
/// Requests are capped at `concurrent_requests` in flight. Results are not cached.
#[derive(Clone)]
pub struct HorizonClient {
    http: reqwest::Client,
    config: HorizonConfig,
    semaphore: Arc<Semaphore>,
    error_count: Arc<AtomicU64>,
}

impl HorizonClient {
    /// Create a new client; no request is made until the first lookup
    pub fn new(config: HorizonConfig) -> ResolveResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("signer-inspector/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ResolveError::ConnectionFailed(format!("Failed to create HTTP client: {}", e))
            })?;

        let semaphore = Arc::new(Semaphore::new(config.concurrent_requests.max(1)));
        Ok(Self {
            http,
            config,
            semaphore,
            error_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Load an account record, retrying transient failures with backoff
    pub async fn load_account(&self, account_id: &str) -> ResolveResult<AccountRecord> {
        let _permit = self.semaphore.acquire().await.map_err(|e| {
            ResolveError::ConnectionFailed(format!("Failed to acquire semaphore: {}", e))
        })?;

        let url = self.account_url(account_id);
        let mut attempts = 0;
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);

        loop {
            attempts += 1;
            match execute_with_timeout(self.config.timeout_seconds, self.fetch_account(&url)).await {
                Ok(Ok(mut record)) => {
                    if attempts > 1 {
                        debug!(
                            "Successfully loaded account {} after {} attempts",
                            account_id, attempts
                        );
                    }
                    if record.id.is_empty() {
                        record.id = account_id.to_string();
                    }
                    return Ok(record);
                }
                Ok(Err(AttemptError::Fatal(ResolveError::NotFound { .. }))) => {
                    debug!("Account {} not found on {}", account_id, self.config.url);
                    return Err(ResolveError::NotFound {
                        id: account_id.to_string(),
                    });
                }
                Ok(Err(AttemptError::Fatal(e))) => {
                    self.error_count.fetch_add(1, Ordering::Relaxed);
                    error!("Failed to load account {}: {}", account_id, e);
                    return Err(e);
                }
                Ok(Err(AttemptError::Retryable(e))) => {
                    self.error_count.fetch_add(1, Ordering::Relaxed);
                    if attempts >= self.config.max_retries {
                        error!(
                            "Failed to load account {} after {} attempts: {}",
                            account_id, attempts, e
                        );
                        return Err(ResolveError::MaxRetriesExceeded {
                            operation: format!("load_account({})", account_id),
                        });
                    }
                    warn!(
                        "Horizon attempt {} failed for account {}, retrying in {:?}: {}",
                        attempts, account_id, backoff, e
                    );
                }
                Err(_) => {
                    self.error_count.fetch_add(1, Ordering::Relaxed);
                    if attempts >= self.config.max_retries {
                        error!(
                            "Horizon timeout for account {} after {} attempts ({}s timeout)",
                            account_id, attempts, self.config.timeout_seconds
                        );
                        return Err(ResolveError::Timeout {
                            timeout_seconds: self.config.timeout_seconds,
                            operation: format!("load_account({})", account_id),
                        });
                    }
                    warn!(
                        "Horizon timeout for account {} on attempt {}, retrying in {:?}",
                        account_id, attempts, backoff
                    );
                }
            }

            sleep(backoff).await;
            backoff = calculate_next_backoff(
                backoff,
                self.config.backoff_multiplier,
                self.config.max_backoff_seconds,
            );
        }
    }

    /// Test Horizon connectivity by fetching the root resource
    pub async fn test_connection(&self) -> ResolveResult<()> {
        let url = self.config.url.trim_end_matches('/').to_string();
        let request = async {
            self.http
                .get(&url)
                .send()
                .await
                .map_err(|e| ResolveError::ConnectionFailed(e.to_string()))?
                .error_for_status()
                .map_err(|e| ResolveError::RequestFailed {
                    url: url.clone(),
                    message: e.to_string(),
                })
        };

        match execute_with_timeout(self.config.timeout_seconds, request).await {
            Ok(Ok(_)) => {
                info!("Horizon connection test successful: {}", url);
                Ok(())
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(ResolveError::Timeout {
                timeout_seconds: self.config.timeout_seconds,
                operation: "connection_test".to_string(),
            }),
        }
    }

    /// Get the current error count from Horizon requests
    pub fn get_error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Get the configured concurrent request limit
    pub fn get_concurrent_limit(&self) -> usize {
        self.config.concurrent_requests.max(1)
    }

    pub fn account_url(&self, account_id: &str) -> String {
        format!("{}/accounts/{}", self.config.url.trim_end_matches('/'), account_id)
    }

    async fn fetch_account(&self, url: &str) -> Result<AccountRecord, AttemptError> {
        let response = self.http.get(url).send().await.map_err(|e| {
            AttemptError::Retryable(ResolveError::RequestFailed {
                url: url.to_string(),
                message: e.to_string(),
            })
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AttemptError::Fatal(ResolveError::NotFound {
                id: url.rsplit('/').next().unwrap_or_default().to_string(),
            }));
        }
        if !status.is_success() {
            let e = ResolveError::RequestFailed {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            };
            return Err(
                if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                    AttemptError::Retryable(e)
                } else {
                    AttemptError::Fatal(e)
                },
            );
        }

        response.json::<AccountRecord>().await.map_err(|e| {
            AttemptError::Fatal(ResolveError::DeserialisationFailed(format!(
                "Failed to decode account record from {}: {}",
                url, e
            )))
        })
    }
}

impl AccountResolver for HorizonClient {
    async fn resolve(&self, account_id: &str) -> ResolveResult<AccountRecord> {
        self.load_account(account_id).await
    }

    fn concurrency_hint(&self) -> usize {
        self.get_concurrent_limit()
    }
}
