//! Canned session ideas offered as one-shot generation input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub title: &'static str,
    pub idea: &'static str,
}

pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        title: "Retrospectiva Sprint",
        idea: "Quero criar uma retrospectiva focada em identificar melhorias de processo para times ágeis, com foco em What Went Well, What Could Be Improved e Action Items",
    },
    Suggestion {
        title: "Planning Poker",
        idea: "Preciso de um template para sessão de Planning Poker para estimativa de user stories, incluindo discussão de critérios de aceitação e definição de done",
    },
    Suggestion {
        title: "Daily Standup",
        idea: "Template para daily standup remoto com foco em impedimentos, progresso e próximos passos, adequado para times distribuídos",
    },
    Suggestion {
        title: "User Story Mapping",
        idea: "Quero criar um template para User Story Mapping que ajude a visualizar a jornada do usuário e priorizar funcionalidades do produto",
    },
    Suggestion {
        title: "Brainstorming de Ideias",
        idea: "Template para sessão de brainstorming criativo com técnicas de divergência e convergência, incluindo votação e priorização de ideias",
    },
    Suggestion {
        title: "Análise de Stakeholders",
        idea: "Preciso de um template para mapear stakeholders do projeto, identificando influência, interesse e estratégias de engajamento",
    },
    Suggestion {
        title: "Lean Canvas",
        idea: "Template para criação de Lean Canvas para validação de modelo de negócio, incluindo problema, solução, métricas-chave e proposta de valor",
    },
    Suggestion {
        title: "Risk Assessment",
        idea: "Quero um template para análise de riscos do projeto com matriz de probabilidade vs impacto e planos de mitigação",
    },
];

/// Suggestion at a one-based `position`, as listed by the CLI.
#[must_use]
pub fn by_position(position: usize) -> Option<&'static Suggestion> {
    position.checked_sub(1).and_then(|i| SUGGESTIONS.get(i))
}

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod tests;
