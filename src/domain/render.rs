use serde::{Deserialize, Serialize};

/// Настройки текстовой отрисовки костяшки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Сколько колонок "воздуха" добавляется к ширине числа
    /// (по умолчанию 2, по одной с каждой стороны).
    pub padding: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { padding: 2 }
    }
}

/// Нарисовать костяшку рамкой из ASCII:
///
/// ```text
/// +---+
/// | 3 |
/// |---|
/// | 4 |
/// +---+
/// ```
///
/// Строки соединяются через `\n`, без перевода строки в конце.
pub fn render_box(top: &str, bottom: &str, config: &RenderConfig) -> String {
    let width = top.len().max(bottom.len());
    let box_width = width + config.padding;
    let rule = "-".repeat(box_width);

    let lines = [
        format!("+{rule}+"),
        format!("|{}|", center(top, box_width)),
        format!("|{rule}|"),
        format!("|{}|", center(bottom, box_width)),
        format!("+{rule}+"),
    ];

    lines.join("\n")
}

/// Центрирование текста в поле: лишний нечётный пробел уходит вправо.
fn center(text: &str, field: usize) -> String {
    let leftover = field.saturating_sub(text.len());
    let left = leftover / 2;
    let right = leftover - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pads_right_on_odd_leftover() {
        assert_eq!(center("3", 3), " 3 ");
        assert_eq!(center("3", 4), " 3  ");
        assert_eq!(center("12", 3), "12 ");
        assert_eq!(center("123", 2), "123");
    }

    #[test]
    fn render_box_uses_widest_side() {
        let out = render_box("10", "3", &RenderConfig::default());
        assert_eq!(out, "+----+\n| 10 |\n|----|\n| 3  |\n+----+");
    }

    #[test]
    fn render_box_with_zero_padding() {
        let out = render_box("3", "4", &RenderConfig { padding: 0 });
        assert_eq!(out, "+-+\n|3|\n|-|\n|4|\n+-+");
    }
}
