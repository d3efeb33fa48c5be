//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p meshport-api`. Each app gets its own temporary
//! upload and export directories.

#![allow(dead_code)]

pub mod fixtures;
pub mod workflows;

use axum_test::TestServer;
use meshport_api::setup::routes;
use meshport_api::state::AppState;
use meshport_core::{BaseConfig, Config, ServiceConfig};
use meshport_storage::{LocalStorage, Storage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server, state, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Parent of the upload and export directories
    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.root().join("uploads")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.root().join("exports")
    }
}

/// Setup test app with default settings.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust the configuration first.
pub async fn setup_test_app_with(customize: impl FnOnce(&mut ServiceConfig)) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let mut service = create_test_config(temp_dir.path());
    customize(&mut service);
    let config = Config::new(service);

    let uploads: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.upload_dir())
            .await
            .expect("Failed to create upload storage"),
    );
    let exports: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.export_dir())
            .await
            .expect("Failed to create export storage"),
    );

    let state = Arc::new(AppState::new(config.clone(), uploads, exports));
    let app = routes::setup_routes(&config, state.clone()).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}

fn create_test_config(root: &Path) -> ServiceConfig {
    ServiceConfig {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
            http_concurrency_limit: 64,
        },
        upload_dir: root.join("uploads"),
        export_dir: root.join("exports"),
        max_upload_size_bytes: 10 * 1024 * 1024,
        obj_include_normals: false,
    }
}
