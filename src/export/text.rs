//! Markdown-like text export.
//!
//! Section order is fixed: title, objective, participants, duration,
//! materials, frames, connections, facilitation steps, coaching tips,
//! variations.

use crate::template::{Frame, Step, Template};

/// Render `template` as shareable text.
#[must_use]
pub fn render(template: &Template) -> String {
    let frames = template
        .structure
        .frames
        .iter()
        .map(frame_block)
        .collect::<Vec<_>>()
        .join("\n");
    let steps = template
        .facilitation
        .iter()
        .map(step_block)
        .collect::<Vec<_>>()
        .join("\n");

    [
        format!("# {}", template.title),
        format!("## 🎯 Objetivo\n{}", template.objective),
        format!("## 👥 Participantes\n{}", template.participants.join(", ")),
        format!("## ⏱️ Duração\n{}", template.duration),
        format!("## 📋 Materiais\n{}", bullets(&template.materials)),
        format!("## 🎨 Estrutura Visual\n\n### Frames:\n{frames}"),
        format!("### Conexões:\n{}", bullets(&template.structure.connections)),
        format!("## 🎪 Facilitação Passo a Passo\n\n{steps}"),
        format!("## 🚀 Dicas para Agile Coach\n{}", bullets(&template.coaching_tips)),
        format!("## 🔄 Variações Possíveis\n{}", bullets(&template.variations)),
    ]
    .join("\n\n")
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn frame_block(frame: &Frame) -> String {
    format!("\n**{}**\n{}\nElementos: {}\n", frame.name, frame.description, frame.elements.join(", "))
}

fn step_block(step: &Step) -> String {
    format!(
        "\n**Passo {}**: {}\n⏱️ Tempo: {}\n💡 Dica: {}\n",
        step.step, step.action, step.time, step.coaching_tip
    )
}
