//! 响应式属性测试：基础读写、watch 监听、微队列的 FIFO 消费与多生产者。

use crate::internal::states::queue_reactive::QueueReactiveProperty;
use crate::states::unlock_reactive::UnlockReactiveProperty;

#[tokio::test]
async fn unlock_basic_update_and_read() {
    let prop = UnlockReactiveProperty::new(0u64);
    prop.update(42).unwrap();
    assert_eq!(prop.get_current().unwrap(), 42);

    prop.update_field(|v| *v += 8).unwrap();
    assert_eq!(prop.get_current().unwrap(), 50);
}

#[tokio::test]
async fn unlock_watch_receives_updates() {
    let prop = UnlockReactiveProperty::new(0i32);
    let mut watcher = prop.watch();

    prop.update(1).unwrap();
    let v = watcher.changed().await.unwrap();
    assert_eq!(v, 1);

    prop.update(2).unwrap();
    let v = watcher.changed().await.unwrap();
    assert_eq!(v, 2);
}

#[tokio::test]
async fn unlock_clones_share_state() {
    let prop = UnlockReactiveProperty::new(String::from("a"));
    let other = prop.clone();

    prop.update(String::from("b")).unwrap();
    assert_eq!(other.get_current().unwrap(), "b");
}

#[tokio::test]
async fn queue_consumes_in_fifo_order() {
    let (producer, mut consumer) = QueueReactiveProperty::new();

    for i in 0..5u64 {
        producer.send(i).unwrap();
    }

    for expected in 0..5u64 {
        assert_eq!(consumer.recv().await, Some(expected));
    }
}

#[tokio::test]
async fn queue_supports_multiple_producers() {
    let (producer, mut consumer) = QueueReactiveProperty::new();

    let mut handles = Vec::new();
    for worker in 0..4u64 {
        let p = producer.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..10u64 {
                p.send(worker * 100 + i).unwrap();
            }
        }));
    }
    drop(producer);

    for h in handles {
        h.await.unwrap();
    }

    let mut received = Vec::new();
    while let Some(v) = consumer.recv().await {
        received.push(v);
    }

    assert_eq!(received.len(), 40, "全部生产者的消息都应被消费到");
    // 全部生产者释放后队列关闭
    assert_eq!(consumer.recv().await, None);
}

#[tokio::test]
async fn queue_state_mirrors_last_message() {
    let (producer, mut consumer) = QueueReactiveProperty::new();
    let mut watcher = producer.watch();

    producer.send(7u64).unwrap();
    assert_eq!(watcher.changed().await.unwrap(), Some(7));

    assert_eq!(consumer.recv().await, Some(7));
    assert_eq!(consumer.try_recv(), None, "队列应已清空");
}
