use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Hands an unconsumed back signal to the shell's default handler. The core
/// emits this only when it chose not to intercept; the absence of the effect
/// is what "signal consumed" means.
#[derive(Clone)]
pub struct Navigate<E> {
    context: CapabilityContext<NavigateOperation, E>,
}

impl<Ev> Capability<Ev> for Navigate<Ev> {
    type Operation = NavigateOperation;
    type MappedSelf<MappedEv> = Navigate<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Navigate::new(self.context.map_event(f))
    }
}

impl<E> Navigate<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<NavigateOperation, E>) -> Self {
        Self { context }
    }

    /// Perform the platform's default back action.
    pub fn back(&self) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(NavigateOperation::Back).await;
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigateOperation {
    Back,
}

impl Operation for NavigateOperation {
    type Output = ();
}
