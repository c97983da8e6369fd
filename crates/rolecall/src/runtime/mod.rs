//! The boundary to the external conversation runtime.
//!
//! The composition core's entire contract with whatever actually runs the
//! multi-agent exchange is an [`AgentSpec`] — a name, a role, and a fully
//! resolved system message. Scheduling, reply generation, and retry policy
//! all live on the far side of [`ConversationRuntime`]; this crate only
//! promises that the system message it hands over contains no unresolved
//! placeholder.
//!
//! [`ScriptedRuntime`] is the in-tree implementation: a deterministic stand
//! in that replays canned lines, used by tests and the CLI dry-run.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identity and instructions for one conversation participant.
///
/// A plain data record: the runtime owns whatever participant object it
/// builds from this, and the core never sees it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Unique participant name, e.g. `Guard_2`.
    pub name: String,
    /// The lowercased role the participant plays.
    pub role: String,
    /// The fully composed system message.
    pub system_message: String,
}

/// One utterance in a finished conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub speaker: String,
    pub content: String,
}

/// A finished conversation, as returned by the runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub messages: Vec<TranscriptMessage>,
}

impl Transcript {
    pub fn push(&mut self, speaker: impl Into<String>, content: impl Into<String>) {
        self.messages.push(TranscriptMessage {
            speaker: speaker.into(),
            content: content.into(),
        });
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for message in &self.messages {
            writeln!(f, "[{}] {}", message.speaker, message.content)?;
        }
        Ok(())
    }
}

/// What the external conversation capability must provide.
///
/// Implementations accept agent specs one by one, then run the exchange
/// from a starting message and return the transcript.
pub trait ConversationRuntime {
    fn create_agent(&mut self, spec: AgentSpec) -> Result<()>;
    fn run(&mut self, starting_message: &str) -> Result<Transcript>;
}

// ── Scripted stand-in ──────────────────────────────────────────────

/// Deterministic runtime double: records the specs it is given and replays
/// a canned script, attributing lines to agents round-robin.
#[derive(Debug, Default)]
pub struct ScriptedRuntime {
    pub agents: Vec<AgentSpec>,
    script: Vec<String>,
}

impl ScriptedRuntime {
    pub fn new(script: Vec<String>) -> Self {
        ScriptedRuntime {
            agents: Vec::new(),
            script,
        }
    }
}

impl ConversationRuntime for ScriptedRuntime {
    fn create_agent(&mut self, spec: AgentSpec) -> Result<()> {
        self.agents.push(spec);
        Ok(())
    }

    fn run(&mut self, starting_message: &str) -> Result<Transcript> {
        let mut transcript = Transcript::default();
        transcript.push("Researcher", starting_message);
        for (i, line) in self.script.iter().enumerate() {
            let speaker = match self.agents.get(i % self.agents.len().max(1)) {
                Some(agent) => agent.name.clone(),
                None => "Nobody".to_string(),
            };
            transcript.push(speaker, line.clone());
        }
        Ok(transcript)
    }
}
