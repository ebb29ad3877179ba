//! Fallback generator — deterministic keyword-matched templates.
//!
//! DESIGN
//! ======
//! Used whenever the completion backend is unavailable or returns something
//! unusable. The idea is lowercased and checked against an ordered rule
//! table by substring containment; the first rule with a matching keyword
//! wins. No match yields a generic template with the idea interpolated into
//! the objective.

use crate::template::{Frame, Step, Structure, TemplateDraft};

/// Objective prefix of the generic template; the raw idea follows it.
pub const GENERIC_OBJECTIVE_PREFIX: &str = "Facilitar uma sessão estruturada focada em: ";

struct Rule {
    keywords: &'static [&'static str],
    build: fn() -> TemplateDraft,
}

const RULES: &[Rule] = &[
    Rule { keywords: &["retrospectiva", "retro"], build: retrospective },
    Rule { keywords: &["planning poker", "planning", "estimativa"], build: planning_poker },
    Rule { keywords: &["daily", "standup", "stand-up"], build: daily_standup },
    Rule { keywords: &["brainstorm", "ideação", "ideacao"], build: brainstorming },
];

/// Pick a fixture for `idea`, or build the generic template around it.
#[must_use]
pub fn generate(idea: &str) -> TemplateDraft {
    let lowered = idea.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map_or_else(|| generic(idea), |rule| (rule.build)())
}

// =============================================================================
// FIXTURES
// =============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn frame(name: &str, description: &str, elements: &[&str]) -> Frame {
    Frame { name: name.into(), description: description.into(), elements: strings(elements) }
}

fn step(step: u32, action: &str, time: &str, coaching_tip: &str) -> Step {
    Step { step, action: action.into(), time: time.into(), coaching_tip: coaching_tip.into() }
}

fn retrospective() -> TemplateDraft {
    TemplateDraft {
        title: "Retrospectiva de Sprint".into(),
        objective: "Refletir sobre a última sprint e definir ações concretas de melhoria para o time".into(),
        participants: strings(&["Scrum Master", "Product Owner", "Desenvolvedores"]),
        duration: "90 minutos".into(),
        materials: strings(&["Sticky notes virtuais", "Timer", "Quadro Miro", "Votação por pontos"]),
        structure: Structure {
            frames: vec![
                frame(
                    "Check-in",
                    "Aquecimento e alinhamento do clima do time",
                    &["Como você chega hoje?", "Objetivo da sessão", "Acordos de convivência"],
                ),
                frame(
                    "O que foi bem",
                    "Celebrar o que funcionou na sprint",
                    &["Conquistas", "Práticas a manter", "Reconhecimentos"],
                ),
                frame(
                    "O que pode melhorar",
                    "Identificar obstáculos e frustrações",
                    &["Impedimentos", "Processos lentos", "Comunicação"],
                ),
                frame(
                    "Ações",
                    "Transformar aprendizados em compromissos",
                    &["Ação", "Responsável", "Prazo"],
                ),
            ],
            connections: strings(&[
                "Setas de 'O que pode melhorar' para 'Ações'",
                "Agrupamento por temas dentro de cada frame",
            ]),
        },
        facilitation: vec![
            step(1, "Abrir a sessão e fazer o check-in", "10 minutos", "Garanta que todos falem logo no início"),
            step(2, "Relembrar o objetivo da sprint e os acordos", "5 minutos", "Mantenha o ambiente seguro e sem culpados"),
            step(3, "Escrita individual: o que foi bem", "10 minutos", "Escrita silenciosa evita viés de grupo"),
            step(4, "Escrita individual: o que pode melhorar", "10 minutos", "Peça fatos concretos, não opiniões vagas"),
            step(5, "Agrupar notas por tema e votar", "15 minutos", "Use dot voting com 3 votos por pessoa"),
            step(6, "Discutir os temas mais votados", "25 minutos", "Use os 5 porquês para chegar à causa raiz"),
            step(7, "Definir ações com responsável e prazo", "15 minutos", "Limite a 2 ou 3 ações para garantir execução"),
        ],
        coaching_tips: strings(&[
            "Revise as ações da retrospectiva anterior antes de começar",
            "Proteja o tempo de escrita silenciosa",
            "Varie o formato a cada sprint para evitar monotonia",
            "Feche com um check-out rápido sobre a própria sessão",
        ]),
        variations: strings(&[
            "Formato Starfish (Começar, Parar, Continuar, Mais, Menos)",
            "Sailboat com vento, âncoras, rochas e ilha",
            "Versão remota com breakout rooms para times grandes",
        ]),
    }
}

fn planning_poker() -> TemplateDraft {
    TemplateDraft {
        title: "Planning Poker".into(),
        objective: "Estimar user stories de forma colaborativa e alinhar o entendimento do time".into(),
        participants: strings(&["Product Owner", "Scrum Master", "Desenvolvedores", "QA"]),
        duration: "60 minutos".into(),
        materials: strings(&["Cartas de Planning Poker", "Backlog priorizado", "Timer", "Quadro Miro"]),
        structure: Structure {
            frames: vec![
                frame("Backlog", "Stories candidatas à estimativa", &["Story", "Critérios de aceitação", "Definition of Done"]),
                frame("Mesa de estimativa", "Área de votação por rodada", &["Cartas reveladas", "Maior estimativa", "Menor estimativa"]),
                frame("Estimadas", "Stories com pontos acordados", &["Story", "Pontos", "Observações"]),
            ],
            connections: strings(&["Backlog → Mesa de estimativa → Estimadas"]),
        },
        facilitation: vec![
            step(1, "Apresentar a escala de pontos e as regras", "5 minutos", "Reforce que estimativa é relativa, não em horas"),
            step(2, "Product Owner lê a story e os critérios", "5 minutos", "Esclareça dúvidas antes de votar"),
            step(3, "Votação simultânea", "5 minutos", "Todos revelam ao mesmo tempo para evitar ancoragem"),
            step(4, "Discutir maior e menor estimativa", "10 minutos", "Dê voz primeiro a quem votou nos extremos"),
            step(5, "Revotar até convergir", "10 minutos", "Limite a três rodadas por story"),
            step(6, "Registrar pontos e seguir para a próxima story", "25 minutos", "Mantenha o ritmo com timebox por story"),
        ],
        coaching_tips: strings(&[
            "Use uma story de referência já conhecida pelo time",
            "Evite que a opinião do mais sênior encerre a discussão",
            "Stories grandes demais devem ser quebradas, não estimadas",
        ]),
        variations: strings(&[
            "T-shirt sizing para backlogs muito grandes",
            "Estimativa assíncrona com votação em canal",
            "Affinity estimation para dezenas de stories",
        ]),
    }
}

fn daily_standup() -> TemplateDraft {
    TemplateDraft {
        title: "Daily Standup Remoto".into(),
        objective: "Sincronizar progresso, próximos passos e impedimentos do time distribuído".into(),
        participants: strings(&["Desenvolvedores", "Scrum Master", "Product Owner (opcional)"]),
        duration: "15 minutos".into(),
        materials: strings(&["Quadro Miro", "Timer visível", "Board da sprint"]),
        structure: Structure {
            frames: vec![
                frame("Progresso", "O que avançou desde a última daily", &["Concluído", "Em andamento"]),
                frame("Próximos passos", "Foco até a próxima daily", &["Prioridade do dia", "Pareamentos"]),
                frame("Impedimentos", "Bloqueios que precisam de ajuda", &["Bloqueio", "Quem pode ajudar"]),
            ],
            connections: strings(&["Impedimentos ligados às tarefas em andamento"]),
        },
        facilitation: vec![
            step(1, "Abrir com o objetivo da sprint", "1 minuto", "Comece pontualmente, mesmo sem todos"),
            step(2, "Rodada de progresso e próximos passos", "10 minutos", "Foque no trabalho, não nas pessoas"),
            step(3, "Levantar impedimentos", "3 minutos", "Anote e trate detalhes depois da daily"),
            step(4, "Encerrar e marcar conversas paralelas", "1 minuto", "Convide só quem precisa para o pós-daily"),
        ],
        coaching_tips: strings(&[
            "Percorra o board da direita para a esquerda",
            "Mantenha câmeras ligadas quando possível",
            "Discussões longas vão para depois da daily",
        ]),
        variations: strings(&[
            "Daily assíncrona por texto para fusos diferentes",
            "Walk the board em vez de rodada por pessoa",
        ]),
    }
}

fn brainstorming() -> TemplateDraft {
    TemplateDraft {
        title: "Brainstorming de Ideias".into(),
        objective: "Gerar, agrupar e priorizar ideias com técnicas de divergência e convergência".into(),
        participants: strings(&["Facilitador", "Time de produto", "Stakeholders convidados"]),
        duration: "75 minutos".into(),
        materials: strings(&["Sticky notes virtuais", "Timer", "Quadro Miro", "Votação por pontos"]),
        structure: Structure {
            frames: vec![
                frame("Desafio", "Pergunta central da sessão", &["Como poderíamos...?", "Restrições", "Critérios de sucesso"]),
                frame("Divergência", "Geração livre de ideias", &["Ideias individuais", "Ideias inspiradas", "Ideias malucas"]),
                frame("Convergência", "Agrupamento e votação", &["Clusters", "Votos", "Top 3"]),
                frame("Próximos passos", "Encaminhamento das ideias escolhidas", &["Experimento", "Responsável", "Data"]),
            ],
            connections: strings(&["Desafio → Divergência → Convergência → Próximos passos"]),
        },
        facilitation: vec![
            step(1, "Apresentar o desafio em formato 'Como poderíamos'", "5 minutos", "Uma pergunta aberta gera mais ideias"),
            step(2, "Brainstorming individual silencioso", "10 minutos", "Quantidade antes de qualidade"),
            step(3, "Compartilhar e construir sobre ideias dos outros", "15 minutos", "Proíba críticas nesta fase"),
            step(4, "Agrupar ideias por afinidade", "15 minutos", "Deixe o grupo nomear os clusters"),
            step(5, "Votação por pontos", "10 minutos", "Votos secretos reduzem efeito manada"),
            step(6, "Definir experimentos para o top 3", "20 minutos", "Saia com responsáveis e datas"),
        ],
        coaching_tips: strings(&[
            "Separe claramente divergência de convergência",
            "Use aquecimento criativo para grupos tímidos",
            "Registre ideias descartadas para sessões futuras",
        ]),
        variations: strings(&[
            "Crazy 8s para ideias visuais",
            "Brainwriting 6-3-5 para grupos grandes",
            "Versão assíncrona ao longo de uma semana",
        ]),
    }
}

/// The generic template built around `idea`.
#[must_use]
pub fn generic(idea: &str) -> TemplateDraft {
    TemplateDraft {
        title: format!("Template: {}", capitalize(idea)),
        objective: format!("{GENERIC_OBJECTIVE_PREFIX}{idea}"),
        participants: strings(&["Product Owner", "Scrum Master", "Desenvolvedores", "UX/UI Designer"]),
        duration: "90 minutos".into(),
        materials: strings(&["Sticky notes virtuais", "Timer", "Quadro Miro", "Marcadores coloridos"]),
        structure: Structure {
            frames: vec![
                frame(
                    "Preparação",
                    "Frame inicial para contexto e alinhamento",
                    &["Objetivo da sessão", "Regras de participação", "Agenda", "Icebreaker"],
                ),
                frame(
                    "Execução Principal",
                    "Frame principal da atividade",
                    &["Área de brainstorming", "Categorização", "Votação", "Priorização"],
                ),
                frame(
                    "Síntese",
                    "Frame para consolidação dos resultados",
                    &["Resumo das decisões", "Próximos passos", "Responsáveis", "Timeline"],
                ),
            ],
            connections: strings(&[
                "Setas conectando preparação → execução → síntese",
                "Linhas agrupando itens relacionados",
            ]),
        },
        facilitation: vec![
            step(1, "Apresentar o objetivo e contexto da sessão", "10 minutos", "Mantenha o foco no problema a ser resolvido, evite dispersão"),
            step(2, "Conduzir brainstorming individual silencioso", "15 minutos", "Incentive quantidade sobre qualidade nesta fase"),
            step(3, "Compartilhamento e agrupamento das ideias", "20 minutos", "Facilite a discussão sem julgar as ideias apresentadas"),
            step(4, "Votação e priorização colaborativa", "15 minutos", "Use dot voting para democratizar as decisões"),
            step(5, "Definição de próximos passos e responsáveis", "20 minutos", "Seja específico sobre quem fará o quê e quando"),
            step(6, "Retrospectiva rápida da sessão", "10 minutos", "Colete feedback para melhorar futuras facilitações"),
        ],
        coaching_tips: strings(&[
            "Mantenha energia alta com breaks regulares",
            "Use timeboxing rigoroso para manter o foco",
            "Incentive participação equilibrada de todos",
            "Documente decisões em tempo real",
            "Prepare-se para adaptar o formato conforme necessário",
        ]),
        variations: strings(&[
            "Versão remota com breakout rooms",
            "Formato assíncrono para times distribuídos",
            "Adaptação para diferentes tamanhos de grupo",
            "Integração com outras metodologias ágeis",
        ]),
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
