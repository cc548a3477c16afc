use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIRM_LABEL: &str = "OK";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Native dialogs. `Confirm` blocks on an explicit user choice; `Inform` is a
/// one-shot alert the shell dismisses on its own.
#[derive(Clone)]
pub struct Dialog<E> {
    context: CapabilityContext<DialogOperation, E>,
}

impl<Ev> Capability<Ev> for Dialog<Ev> {
    type Operation = DialogOperation;
    type MappedSelf<MappedEv> = Dialog<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Dialog::new(self.context.map_event(f))
    }
}

impl<E> Dialog<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<DialogOperation, E>) -> Self {
        Self { context }
    }

    /// Presents a blocking confirmation prompt and maps the user's choice
    /// back into an app event.
    pub fn confirm<F>(&self, prompt: ConfirmPrompt, callback: F)
    where
        F: FnOnce(DialogResponse) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let response = context
                .request_from_shell(DialogOperation::Confirm {
                    title: prompt.title,
                    message: prompt.message,
                    confirm_label: prompt.confirm_label,
                    cancel_label: prompt.cancel_label,
                    destructive: prompt.destructive,
                })
                .await;
            context.update_app(callback(response));
        });
    }

    /// Fire-and-forget alert. No response is expected; dismissal stays in
    /// the shell.
    pub fn inform(&self, title: impl Into<String>, message: impl Into<String>) {
        let operation = DialogOperation::Inform {
            title: title.into(),
            message: message.into(),
        };
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogOperation {
    Confirm {
        title: String,
        message: String,
        confirm_label: String,
        cancel_label: String,
        destructive: bool,
    },
    Inform {
        title: String,
        message: String,
    },
}

impl Operation for DialogOperation {
    type Output = DialogResponse;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogResponse {
    Confirmed,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub destructive: bool,
}

impl ConfirmPrompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: DEFAULT_CONFIRM_LABEL.into(),
            cancel_label: DEFAULT_CANCEL_LABEL.into(),
            destructive: false,
        }
    }

    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Marks the confirming choice as destructive so shells can style it
    /// accordingly (red on iOS action sheets, for instance).
    #[must_use]
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}
