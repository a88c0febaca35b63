use crate::ui::app::App;
use crate::ui::detail::render_detail_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::toaster::render_toasts;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.is_busy(), app.tick());
    frame.render_widget(
        header_widget.widget(&app.tab_labels(), app.breadcrumb()),
        header,
    );

    frame.render_widget(Clear, body);
    app.render_body(frame, body);

    let footer_widget = Footer::new(app.is_drilled_in());
    frame.render_widget(footer_widget.widget(footer), footer);

    render_toasts(frame, body, &app.toasts());
    render_detail_dialog(frame, body, app.detail());
}
