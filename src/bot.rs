//! Bot runtime — pumps channel messages through the router.

use std::sync::Arc;

use futures::StreamExt;

use crate::audit::{AuditEntry, AuditSink};
use crate::channels::{Channel, IncomingMessage, OutgoingReply};
use crate::error::Error;
use crate::router::Router;

/// Owns the channels and drives the turn loop: audit → route → respond.
pub struct BotRuntime {
    channels: Vec<Arc<dyn Channel>>,
    router: Arc<Router>,
    audit: Arc<dyn AuditSink>,
}

impl BotRuntime {
    pub fn new(router: Arc<Router>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            channels: Vec::new(),
            router,
            audit,
        }
    }

    pub fn add_channel(&mut self, channel: Arc<dyn Channel>) {
        self.channels.push(channel);
    }

    /// Start every channel and process turns until all streams end.
    pub async fn run(&self) -> Result<(), Error> {
        let mut streams = Vec::new();
        for (idx, channel) in self.channels.iter().enumerate() {
            if let Err(e) = channel.health_check().await {
                tracing::warn!(channel = channel.name(), error = %e, "health check failed");
            }
            let stream = channel.start().await?;
            streams.push(stream.map(move |msg| (idx, msg)).boxed());
        }

        let mut merged = futures::stream::select_all(streams);
        while let Some((idx, msg)) = merged.next().await {
            self.process(Arc::clone(&self.channels[idx]), msg).await;
        }

        for channel in &self.channels {
            if let Err(e) = channel.shutdown().await {
                tracing::warn!(channel = channel.name(), error = %e, "shutdown failed");
            }
        }
        Ok(())
    }

    async fn process(&self, channel: Arc<dyn Channel>, msg: IncomingMessage) {
        self.record_action(&msg, msg.text.trim().to_string());

        let reply = self.router.route(msg.chat_id, &msg.text);
        if let Some(feedback) = &reply.recorded_feedback {
            self.record_action(&msg, format!("FEEDBACK: {feedback}"));
        }

        let mut outgoing = OutgoingReply::new(reply.text);
        if let Some(keyboard) = reply.keyboard {
            outgoing = outgoing.with_keyboard(keyboard);
        }
        if let Err(e) = channel.respond(&msg, outgoing).await {
            tracing::error!(channel = channel.name(), error = %e, "failed to send reply");
        }
    }

    /// Fire-and-forget audit write; a failing sink never delays the reply.
    fn record_action(&self, msg: &IncomingMessage, action: String) {
        let audit = Arc::clone(&self.audit);
        let entry = AuditEntry::now(
            msg.user_id,
            msg.username.clone().or_else(|| msg.display_name.clone()),
            action,
        );
        tokio::spawn(async move {
            if let Err(e) = audit.record(entry).await {
                tracing::warn!(error = %e, "audit write failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::audit::TracingAuditSink;
    use crate::channels::MessageStream;
    use crate::engine::DialogueEngine;
    use crate::error::{AuditError, ChannelError};
    use crate::session::InMemorySessionStore;

    struct ScriptedChannel {
        script: Vec<IncomingMessage>,
        sent: Arc<Mutex<Vec<OutgoingReply>>>,
    }

    #[async_trait]
    impl Channel for ScriptedChannel {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn start(&self) -> Result<MessageStream, ChannelError> {
            let script = self.script.clone();
            Ok(Box::pin(futures::stream::iter(script)))
        }

        async fn respond(
            &self,
            _msg: &IncomingMessage,
            reply: OutgoingReply,
        ) -> Result<(), ChannelError> {
            self.sent.lock().unwrap().push(reply);
            Ok(())
        }

        async fn health_check(&self) -> Result<(), ChannelError> {
            Ok(())
        }

        async fn shutdown(&self) -> Result<(), ChannelError> {
            Ok(())
        }
    }

    struct RecordingSink {
        entries: Arc<Mutex<Vec<AuditEntry>>>,
    }

    #[async_trait]
    impl AuditSink for RecordingSink {
        async fn record(&self, entry: AuditEntry) -> Result<(), AuditError> {
            self.entries.lock().unwrap().push(entry);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl AuditSink for FailingSink {
        async fn record(&self, _entry: AuditEntry) -> Result<(), AuditError> {
            Err(AuditError::Write("sink down".into()))
        }
    }

    fn new_router() -> Arc<Router> {
        Arc::new(Router::new(DialogueEngine::new(Arc::new(
            InMemorySessionStore::new(),
        ))))
    }

    fn message(chat_id: i64, text: &str) -> IncomingMessage {
        IncomingMessage::new("scripted", chat_id, chat_id, text).with_username("tester")
    }

    #[tokio::test]
    async fn full_scenario_over_a_channel() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut runtime = BotRuntime::new(new_router(), Arc::new(TracingAuditSink));
        runtime.add_channel(Arc::new(ScriptedChannel {
            script: vec![
                message(1, "Reading"),
                message(1, "True/False"),
                message(1, "Yes"),
            ],
            sent: Arc::clone(&sent),
        }));
        runtime.run().await.unwrap();

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].text, "Reading tasks:");
        assert_eq!(sent[1].text, "Ask to read the text first?");
        assert_eq!(
            sent[2].text,
            "Task formulation:\nRead the text. Match the sentences T (true) or F (false)."
        );
    }

    #[tokio::test]
    async fn every_turn_is_audited() {
        let entries = Arc::new(Mutex::new(Vec::new()));
        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut runtime = BotRuntime::new(
            new_router(),
            Arc::new(RecordingSink {
                entries: Arc::clone(&entries),
            }),
        );
        runtime.add_channel(Arc::new(ScriptedChannel {
            script: vec![message(5, "Vocabulary"), message(5, "Labelling")],
            sent,
        }));
        runtime.run().await.unwrap();

        // Audit writes are spawned; give them a moment to land.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user_id, 5);
        assert_eq!(entries[0].username.as_deref(), Some("tester"));
        assert_eq!(entries[0].action, "Vocabulary");
        assert_eq!(entries[1].action, "Labelling");
    }

    #[tokio::test]
    async fn feedback_is_audited_with_prefix() {
        let entries = Arc::new(Mutex::new(Vec::new()));
        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut runtime = BotRuntime::new(
            new_router(),
            Arc::new(RecordingSink {
                entries: Arc::clone(&entries),
            }),
        );
        runtime.add_channel(Arc::new(ScriptedChannel {
            script: vec![message(1, "Feedback"), message(1, "Love it")],
            sent,
        }));
        runtime.run().await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let entries = entries.lock().unwrap();
        let actions: Vec<&str> = entries.iter().map(|e| e.action.as_str()).collect();
        assert!(actions.contains(&"FEEDBACK: Love it"));
    }

    #[tokio::test]
    async fn audit_failure_does_not_block_replies() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut runtime = BotRuntime::new(new_router(), Arc::new(FailingSink));
        runtime.add_channel(Arc::new(ScriptedChannel {
            script: vec![message(1, "/start")],
            sent: Arc::clone(&sent),
        }));
        runtime.run().await.unwrap();

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.starts_with("Welcome to the Task Formulation Bot!"));
    }
}
