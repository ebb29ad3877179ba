//! Completion prompt for turning an idea into template JSON.

/// Build the agile-coach prompt for `idea`.
///
/// The idea is quoted verbatim; the response is requested as bare JSON in
/// the same shape as [`crate::template::TemplateDraft`].
#[must_use]
pub fn build(idea: &str) -> String {
    format!(
        r#"Como agile coach especialista, transforme a seguinte ideia em um template estruturado para Miro:

"{idea}"

Crie um template que inclua:
1. Título do template
2. Objetivo principal
3. Participantes sugeridos
4. Duração estimada
5. Materiais necessários
6. Estrutura visual detalhada (frames, sticky notes, conectores)
7. Facilitação passo a passo
8. Dicas para o agile coach
9. Possíveis variações

Responda APENAS com um JSON válido no seguinte formato:
{{
  "title": "Nome do Template",
  "objective": "Objetivo principal do template",
  "participants": ["Participante 1", "Participante 2"],
  "duration": "Duração estimada",
  "materials": ["Material 1", "Material 2"],
  "structure": {{
    "frames": [
      {{
        "name": "Nome do Frame",
        "description": "Descrição do frame",
        "elements": ["Elemento 1", "Elemento 2"]
      }}
    ],
    "connections": ["Conexão 1", "Conexão 2"]
  }},
  "facilitation": [
    {{
      "step": 1,
      "action": "Ação a ser executada",
      "time": "Tempo estimado",
      "coaching_tip": "Dica para o coach"
    }}
  ],
  "coaching_tips": ["Dica 1", "Dica 2"],
  "variations": ["Variação 1", "Variação 2"]
}}

NÃO INCLUA NADA ALÉM DO JSON VÁLIDO. NÃO USE BACKTICKS."#
    )
}

/// Recover the quoted idea from a prompt produced by [`build`].
#[must_use]
pub fn extract_idea(prompt: &str) -> Option<&str> {
    let (_, rest) = prompt.split_once(":\n\n\"")?;
    let (idea, _) = rest.split_once("\"\n\n")?;
    Some(idea)
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
