pub async fn health_check() {}
