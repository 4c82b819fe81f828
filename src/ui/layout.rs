use ratatui::layout::Rect;

/// Splits the screen into header, body and footer. A hidden footer takes no
/// rows.
pub fn layout_regions(area: Rect, footer_visible: bool) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = if footer_visible {
        3.min(area.height.saturating_sub(header_height))
    } else {
        0
    };
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area, true);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn hidden_footer_gives_rows_to_body() {
        let area = Rect::new(0, 0, 80, 24);
        let (_, body, footer) = layout_regions(area, false);
        assert_eq!(footer.height, 0);
        assert_eq!(body.height, 21);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let area = Rect::new(0, 0, 10, 2);
        let (header, body, footer) = layout_regions(area, true);
        assert_eq!(header.height, 2);
        assert_eq!(footer.height, 0);
        assert_eq!(body.height, 0);
    }
}
