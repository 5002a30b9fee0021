//! Server-rendered dashboard.
//!
//! Markup is assembled through [`Html`], whose only entry point for
//! non-`'static` strings escapes them. Record values therefore cannot inject
//! markup regardless of what was stored.

use std::fmt::Display;

use models::service::{Model, ServiceStatus};

#[derive(Debug, Default)]
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self { Self::default() }

    /// Literal markup written by this module.
    pub fn raw(&mut self, markup: &'static str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Text content, escaped for element bodies.
    pub fn text(&mut self, value: &str) -> &mut Self {
        html_escape::encode_text_to_string(value, &mut self.buf);
        self
    }

    /// A value placed inside a double-quoted attribute.
    pub fn attr(&mut self, value: &str) -> &mut Self {
        html_escape::encode_double_quoted_attribute_to_string(value, &mut self.buf);
        self
    }

    pub fn display(&mut self, value: impl Display) -> &mut Self {
        self.text(&value.to_string())
    }

    pub fn component(&mut self, c: &impl Component) -> &mut Self {
        c.render(self);
        self
    }

    pub fn into_string(self) -> String { self.buf }
}

pub trait Component {
    fn render(&self, html: &mut Html);
}

pub fn render(c: &impl Component) -> String {
    let mut html = Html::new();
    c.render(&mut html);
    html.into_string()
}

/// Outcome of the connectivity probe shown above the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbStatus {
    Stable,
    Unavailable,
}

impl DbStatus {
    fn color(self) -> &'static str {
        match self {
            DbStatus::Stable => "#28a745",
            DbStatus::Unavailable => "#dc3545",
        }
    }

    fn message(self) -> &'static str {
        match self {
            DbStatus::Stable => "Connection to PostgreSQL database is stable.",
            DbStatus::Unavailable => "Failed to connect to PostgreSQL. Check the server logs for details.",
        }
    }
}

pub struct DashboardPage<'a> {
    pub services: &'a [Model],
    pub db_status: DbStatus,
}

impl Component for DashboardPage<'_> {
    fn render(&self, html: &mut Html) {
        html.raw("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n")
            .raw("<meta charset=\"UTF-8\">\n")
            .raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n")
            .raw("<title>HostNetix - Service Management</title>\n")
            .raw(STYLE)
            .raw("</head>\n<body>\n<div class=\"container\">\n")
            .raw("<h1>HostNetix Service Dashboard</h1>\n")
            .component(&StatusBar(self.db_status))
            .component(&AddServiceForm)
            .component(&InventoryTable { services: self.services })
            .raw("</div>\n</body>\n</html>\n");
    }
}

struct StatusBar(DbStatus);

impl Component for StatusBar {
    fn render(&self, html: &mut Html) {
        html.raw("<div class=\"status-bar\" style=\"background-color: ")
            .raw(self.0.color())
            .raw(";\">\n<strong>Database Status:</strong> ")
            .raw(self.0.message())
            .raw("\n</div>\n");
    }
}

struct AddServiceForm;

impl Component for AddServiceForm {
    fn render(&self, html: &mut Html) {
        html.raw("<div class=\"form-container\">\n<h2>Add New Service</h2>\n")
            .raw("<form action=\"/add\" method=\"POST\" style=\"display: flex; gap: 10px;\">\n")
            .raw("<input type=\"text\" name=\"hostname\" placeholder=\"Enter Hostname (e.g., server1.hostnetix.com)\" required>\n")
            .raw("<input type=\"text\" name=\"ip_address\" placeholder=\"Enter Public IP (e.g., 192.0.2.1)\" required>\n")
            .raw("<button type=\"submit\" class=\"btn add\">Add Service</button>\n")
            .raw("</form>\n</div>\n");
    }
}

struct InventoryTable<'a> {
    services: &'a [Model],
}

impl Component for InventoryTable<'_> {
    fn render(&self, html: &mut Html) {
        html.raw("<div class=\"table-container\">\n<h2>Service Inventory</h2>\n<table>\n")
            .raw("<thead>\n<tr><th>Hostname</th><th>IP Address</th><th>Status</th><th>Created At</th><th>Actions</th></tr>\n</thead>\n")
            .raw("<tbody>\n");
        if self.services.is_empty() {
            html.raw("<tr><td colspan=\"5\" class=\"empty\">No services in inventory.</td></tr>\n");
        }
        for service in self.services {
            html.component(&ServiceRow(service));
        }
        html.raw("</tbody>\n</table>\n</div>\n");
    }
}

struct ServiceRow<'a>(&'a Model);

impl Component for ServiceRow<'_> {
    fn render(&self, html: &mut Html) {
        let s = self.0;
        let (row_bg, status_color) = match s.status {
            ServiceStatus::Sold => ("#343a40", "#ffc107"),
            ServiceStatus::Available => ("#2c3034", "#28a745"),
        };
        html.raw("<tr style=\"background-color: ").raw(row_bg).raw(";\">\n")
            .raw("<td>").text(&s.hostname).raw("</td>\n")
            .raw("<td>").text(&s.ip_address).raw("</td>\n")
            .raw("<td style=\"color: ").raw(status_color).raw(";\">").text(s.status.as_str()).raw("</td>\n")
            .raw("<td>").text(&s.time()).raw("</td>\n")
            .raw("<td class=\"actions\">\n");
        if s.is_available() {
            html.raw("<form action=\"/sell/").attr(&s.id.to_string()).raw("\" method=\"POST\">")
                .raw("<button type=\"submit\" class=\"btn sell\">Sell</button></form>\n");
        }
        html.raw("<form action=\"/delete/").attr(&s.id.to_string()).raw("\" method=\"POST\">")
            .raw("<button type=\"submit\" class=\"btn delete\">Delete</button></form>\n")
            .raw("</td>\n</tr>\n");
    }
}

const STYLE: &str = r#"<style>
body { background-color: #212529; color: #f8f9fa; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif; margin: 0; padding: 2em; }
.container { max-width: 1200px; margin: auto; }
h1, h2 { color: #00b8d4; border-bottom: 2px solid #00b8d4; padding-bottom: 10px; }
.status-bar { margin-top: 1em; padding: 1em; border-radius: 8px; color: #fff; word-wrap: break-word; }
.form-container, .table-container { background-color: #2c3034; padding: 2em; border-radius: 8px; margin-top: 2em; box-shadow: 0 4px 15px rgba(0,0,0,0.2); }
input[type="text"] { width: calc(50% - 22px); padding: 10px; border-radius: 5px; border: 1px solid #444; background-color: #343a40; color: white; font-size: 16px; }
.btn { padding: 10px 20px; font-size: 16px; cursor: pointer; color: white; border: none; border-radius: 5px; transition: background-color 0.3s; }
.btn.add { background-color: #007bff; }
.btn.add:hover { background-color: #0056b3; }
.btn.sell { background-color: #28a745; }
.btn.delete { background-color: #dc3545; }
table { width: 100%; border-collapse: collapse; margin-top: 1em; }
th, td { text-align: left; padding: 12px; }
th { background-color: #343a40; border-bottom: 2px solid #00b8d4; }
td { border-bottom: 1px solid #444; }
td.empty { text-align: center; }
td.actions { display: flex; gap: 10px; align-items: center; }
td.actions form { margin: 0; }
</style>
"#;
