use anyhow::Context;
use mongodb::{options::ClientOptions, Client as MongoDBClient, Database};
use std::{
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
    time::{Duration, Instant},
};
use tempfile::TempDir;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(30);
const STARTUP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs an ephemeral `mongod` for the lifetime of the value.
///
/// TCP is disabled; the server listens only on a unix domain socket inside a
/// temporary directory that also holds its data files. Requires `mongod` on `PATH`.
pub struct MongodRunner {
    child: Child,
    // removed together with the runner
    tempdir: TempDir,
}

impl MongodRunner {
    fn socket_path(dir: &Path) -> anyhow::Result<PathBuf> {
        Ok(dir
            .canonicalize()
            .context("Failed to resolve tempdir path")?
            .join("mongod.sock"))
    }

    pub fn run() -> anyhow::Result<Self> {
        let tempdir = TempDir::new().context("Failed to create tempdir.")?;
        let socket_path = Self::socket_path(tempdir.path())?;
        let socket_str = socket_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("can't convert path to str"))?;

        let child = Command::new("mongod")
            .args([
                "--unixSocketPrefix",
                &tempdir.path().to_string_lossy(),
                "--dbpath",
                &tempdir.path().to_string_lossy(),
                "--bind_ip",
                socket_str,
                "--port",
                "0",
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to start mongod")?;

        let mut runner = Self { child, tempdir };

        // mongod creates the socket once it accepts connections
        let started = Instant::now();
        while !socket_path.exists() {
            if let Some(status) = runner.child.try_wait()? {
                anyhow::bail!("mongod exited during startup with {status}");
            }
            if started.elapsed() > STARTUP_TIMEOUT {
                anyhow::bail!("MongoDB did not create the socket file in time");
            }
            std::thread::sleep(STARTUP_POLL_INTERVAL);
        }

        Ok(runner)
    }

    pub fn socket_pathbuf(&self) -> anyhow::Result<PathBuf> {
        Self::socket_path(self.tempdir.path())
    }

    pub fn client(&self) -> anyhow::Result<MongoDBClient> {
        let server_address = mongodb::options::ServerAddress::Unix {
            path: self.socket_pathbuf()?,
        };
        let client_options = ClientOptions::builder().hosts(vec![server_address]).build();
        Ok(MongoDBClient::with_options(client_options)?)
    }

    pub fn database(&self, name: &str) -> anyhow::Result<Database> {
        Ok(self.client()?.database(name))
    }
}

impl Drop for MongodRunner {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
