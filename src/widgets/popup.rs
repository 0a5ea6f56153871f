use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, clamped to `frame_area`
///
/// The popup starts `x_offset` columns into the anchor and never extends past
/// the right or bottom edge of the frame.
pub fn popup_below_anchor(
    frame_area: Rect,
    anchor: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = (anchor.x + x_offset).min(frame_area.right());
    let popup_y = anchor.bottom().min(frame_area.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.right().saturating_sub(popup_x)),
        height: height.min(frame_area.bottom().saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
