//! # ReactiveProperty — 响应式属性内核
//!
//! 下载进度、下载阶段等高频状态的公共基础设施，
//! 基于 [`tokio::sync::watch`] 实现，读写不阻塞。
//! [`UnlockReactiveProperty`](super::unlock_reactive::UnlockReactiveProperty)
//! 与 [`QueueReactiveProperty`](super::queue_reactive::QueueReactiveProperty)
//! 均基于本模块实现。
//!
//! 本模块**不对外导出**，仅供 `states` 子模块内部复用。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

/// 响应式属性统一错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 监听器已被销毁
    #[error("监听器已被销毁")]
    WatcherClosed,

    /// 属性已被销毁
    #[error("属性已被销毁")]
    Destroyed,

    /// watch 通道接收失败
    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

/// 内部共享状态，包含值发送器和销毁标志。
#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
    pub(crate) is_dropped: AtomicBool,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        self.is_dropped.store(true, Ordering::Relaxed);
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 响应式属性内核：提供 new / update / update_field / get_current / watch 等基础能力。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
    pub(crate) cache_receiver: watch::Receiver<Option<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的响应式属性。
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(Some(value));
        let cache_receiver = sender.subscribe();
        Self {
            inner: Arc::new(Inner {
                sender,
                is_dropped: AtomicBool::new(false),
            }),
            cache_receiver,
        }
    }

    /// 更新属性的值，所有监听者都会收到通知。
    pub fn update(
        &self,
        new_value: T,
    ) -> Result<&Self, ReactivePropertyError> {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return Ok(self);
        }
        match self.inner.sender.send(Some(new_value)) {
            Ok(_) => Ok(self),
            Err(_) => Ok(self),
        }
    }

    /// 使用闭包更新属性的部分字段。
    pub fn update_field<F, R>(
        &self,
        updater: F,
    ) -> Result<&Self, ReactivePropertyError>
    where
        F: FnOnce(&mut T) -> R,
    {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return Ok(self);
        }

        let mut current = match self.cache_receiver.borrow().clone() {
            Some(val) => val,
            None => return Ok(self),
        };

        updater(&mut current);
        let _ = self.inner.sender.send(Some(current));
        Ok(self)
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> Option<T> {
        self.cache_receiver
            .borrow()
            .as_ref()
            .cloned()
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
            inner: Arc::clone(&self.inner),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
    #[allow(dead_code)]
    inner: Arc<Inner<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow().as_ref() {
            None => Err(ReactivePropertyError::WatcherClosed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }
}
