use crux_core::capability::{Capability, CapabilityContext, Operation};
use futures::StreamExt;
use serde::{Deserialize, Serialize};

/// Connectivity collaborator. `fetch` answers once with the current state;
/// `watch` subscribes to change notifications. The shell owns cancellation:
/// ending the stream (e.g. when the status view unmounts) ends the
/// subscription task.
#[derive(Clone)]
pub struct NetInfo<E> {
    context: CapabilityContext<NetInfoOperation, E>,
}

impl<Ev> Capability<Ev> for NetInfo<Ev> {
    type Operation = NetInfoOperation;
    type MappedSelf<MappedEv> = NetInfo<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        NetInfo::new(self.context.map_event(f))
    }
}

impl<E> NetInfo<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<NetInfoOperation, E>) -> Self {
        Self { context }
    }

    /// One-shot read of the current connection state.
    pub fn fetch<F>(&self, callback: F)
    where
        F: FnOnce(ConnectionState) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let state = context.request_from_shell(NetInfoOperation::Fetch).await;
            context.update_app(callback(state));
        });
    }

    /// Emits an event per connectivity change until the shell closes the
    /// stream.
    pub fn watch<F>(&self, make_event: F)
    where
        F: Fn(ConnectionState) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let mut changes = context.stream_from_shell(NetInfoOperation::Watch);
            while let Some(state) = changes.next().await {
                context.update_app(make_event(state));
            }
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetInfoOperation {
    Fetch,
    Watch,
}

impl Operation for NetInfoOperation {
    type Output = ConnectionState;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub is_connected: bool,
}
