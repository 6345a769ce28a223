// tests/common/mod.rs

use roadworthy_vehicle_inspector_lib::context::AppCtx;
use roadworthy_vehicle_inspector_lib::types::AppState;

pub struct TestEnv {
    // Kept alive so the data dir outlives the test body.
    pub _tempdir: tempfile::TempDir,
    pub ctx: AppCtx,
    pub state: AppState,
}

pub fn test_env() -> TestEnv {
    let tempdir = tempfile::tempdir().expect("create temp dir");
    let state = AppState::new_for_tests(tempdir.path()).expect("init app state");
    let ctx = AppCtx::new(tempdir.path().to_path_buf());

    TestEnv {
        _tempdir: tempdir,
        ctx,
        state,
    }
}
