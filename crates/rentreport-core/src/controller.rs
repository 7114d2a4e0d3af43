//! Report controller: owns the session branch and the loaded report data
//!
//! Every load bumps a generation counter before awaiting the store. When the
//! store answers, the result is applied only if no newer load has started in
//! the meantime; otherwise it is dropped and the caller gets
//! [`CoreError::Superseded`].

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rentreport_store::StoreRef;

use crate::error::{CoreError, CoreResult};
use crate::loader::ReportLoader;
use crate::models::ReportData;

/// Session values the report depends on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub branch_code: Option<String>,
}

impl SessionContext {
    pub fn new(branch_code: Option<String>) -> Self {
        Self { branch_code }
    }

    /// Branch code, ignoring blank values
    pub fn branch(&self) -> Option<&str> {
        self.branch_code
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }
}

/// Where the current branch's data is in its lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "Idle",
            LoadStatus::Loading => "Loading",
            LoadStatus::Ready => "Ready",
            LoadStatus::Failed(_) => "Failed",
        }
    }
}

/// Point-in-time copy of the controller state
#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    pub branch_code: Option<String>,
    pub status: LoadStatus,
    pub generation: u64,
    pub data: Arc<ReportData>,
}

#[derive(Debug, Default)]
struct ControllerState {
    session: SessionContext,
    status: LoadStatus,
    generation: u64,
    data: Arc<ReportData>,
}

pub struct ReportController {
    loader: ReportLoader,
    state: RwLock<ControllerState>,
}

impl ReportController {
    pub fn new(store: StoreRef, session: SessionContext) -> Self {
        Self {
            loader: ReportLoader::new(store),
            state: RwLock::new(ControllerState {
                session,
                ..Default::default()
            }),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ControllerState> {
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ControllerState> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn session(&self) -> SessionContext {
        self.read_state().session.clone()
    }

    pub fn snapshot(&self) -> ReportSnapshot {
        let state = self.read_state();
        ReportSnapshot {
            branch_code: state.session.branch().map(str::to_string),
            status: state.status.clone(),
            generation: state.generation,
            data: Arc::clone(&state.data),
        }
    }

    /// Load both report sets for `branch_code`
    ///
    /// A traversal that fails leaves its half of the data empty while the
    /// other half is still applied; the status becomes `Failed` and the
    /// first error is returned.
    pub async fn load(&self, branch_code: &str) -> CoreResult<Arc<ReportData>> {
        let generation = {
            let mut state = self.write_state();
            state.generation += 1;
            state.session.branch_code = Some(branch_code.to_string());
            state.status = LoadStatus::Loading;
            state.data = Arc::new(ReportData::default());
            state.generation
        };
        log::info!("Loading report for branch {} (generation {})", branch_code, generation);

        let outcome = self.loader.load(branch_code).await;

        let mut state = self.write_state();
        if state.generation != generation {
            log::debug!(
                "Discarding report for branch {} (generation {}, current {})",
                branch_code,
                generation,
                state.generation
            );
            return Err(CoreError::Superseded {
                branch: branch_code.to_string(),
            });
        }

        let mut data = ReportData::default();
        let mut failure: Option<CoreError> = None;
        match outcome.sales {
            Ok(sales) => data.sales = sales,
            Err(e) => {
                e.log("load_sales");
                failure = Some(e);
            }
        }
        match outcome.products {
            Ok(products) => data.products = products,
            Err(e) => {
                e.log("load_product_report");
                if failure.is_none() {
                    failure = Some(e);
                }
            }
        }

        let data = Arc::new(data);
        state.data = Arc::clone(&data);
        match failure {
            None => {
                state.status = LoadStatus::Ready;
                Ok(data)
            }
            Some(e) => {
                log::warn!("Report for branch {} loaded with errors: {}", branch_code, e);
                state.status = LoadStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Load the session's branch; without one nothing is loaded
    pub async fn load_session(&self) -> CoreResult<Option<Arc<ReportData>>> {
        let branch = self.session().branch().map(str::to_string);
        match branch {
            Some(branch) => self.load(&branch).await.map(Some),
            None => {
                log::info!("No branch code in session, skipping report load");
                Ok(None)
            }
        }
    }

    /// Point the session at another branch and load it
    pub async fn switch_branch(&self, branch_code: &str) -> CoreResult<Arc<ReportData>> {
        let branch = branch_code.trim();
        if branch.is_empty() {
            return Err(CoreError::NoBranch);
        }
        log::info!("Switching report branch to {}", branch);
        self.load(branch).await
    }

    /// Load the current branch again
    pub async fn reload(&self) -> CoreResult<Arc<ReportData>> {
        let branch = self
            .session()
            .branch()
            .map(str::to_string)
            .ok_or(CoreError::NoBranch)?;
        self.load(&branch).await
    }
}
