use anyhow::Context;
use shop_api::infrastructure::logger::Logger;
use shop_api::Config;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("加载配置失败")?;
    Logger::init(&config.logging);

    let app = shop_api::router(&config);
    let addr = config.http.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("   GET /orders - 订单列表");
    info!("   GET /users  - 用户列表");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听关闭信号: {}", e);
    }
}
