use anyhow::Result;

/// Resolves once the process is asked to stop (SIGTERM/SIGINT, or the Windows console events).
pub async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => tracing::info!("shutdown: SIGTERM received"),
            _ = sigint.recv()  => tracing::info!("shutdown: SIGINT received"),
        }
        Ok(())
    }

    #[cfg(windows)]
    {
        use tokio::signal::windows::{ctrl_break, ctrl_c, ctrl_close, ctrl_shutdown};
        use tokio::time::{timeout, Duration};

        async fn arm_once() -> std::io::Result<()> {
            let mut c = ctrl_c()?;
            let mut br = ctrl_break()?;
            let mut cl = ctrl_close()?;
            let mut sh = ctrl_shutdown()?;

            tokio::select! {
                _ = c.recv()  => {},
                _ = br.recv() => {},
                _ = cl.recv() => {},
                _ = sh.recv() => {},
            }
            Ok(())
        }

        // A console event firing right after arming is spurious; wait for the next one.
        match timeout(Duration::from_millis(50), arm_once()).await {
            Ok(Ok(())) => {
                tracing::warn!("shutdown: early Windows console signal detected; debouncing");
                arm_once().await?;
            }
            Ok(Err(e)) => return Err(e.into()),
            Err(_elapsed) => arm_once().await?,
        }
        tracing::info!("shutdown: console signal received");
        Ok(())
    }
}
