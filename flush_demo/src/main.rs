use flushcache::cache::FlushCache;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut cache = FlushCache::new();
    cache.put("1", "apple");
    cache.put("2", "banana");
    println!("{:?}", cache.info()); // size: 2

    cache.set_flush_interval(Some(250.0)).unwrap();
    sleep(Duration::from_millis(400)).await;
    println!("{:?}", cache.info()); // size: 0

    cache.put("3", "cherry");
    cache.set_flush_interval(None).unwrap();
    sleep(Duration::from_millis(400)).await;
    println!("{:?}", cache.info()); // size: 1, flush stopped

    println!("{:?}", cache.set_flush_interval(Some(-1.0))); // Err(NotPositive)
}
