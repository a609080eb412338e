//! Email rendering for host and service alerts.
//!
//! Rendering is pure: given an alert record and the Centreon link settings it
//! produces the subject plus HTML and plain-text bodies, with no knowledge of
//! how the message is delivered. Field values are interpolated verbatim —
//! Centreon macro output is not HTML-escaped before it lands in the table.

use crate::alert::{state_color, HostAlert, ServiceAlert};
use crate::config::CentreonConfig;

/// Subject and both body variants for one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Render a host state-change notification.
pub fn render_host(alert: &HostAlert, centreon: &CentreonConfig) -> RenderedMessage {
    let color = state_color(&alert.host_state);
    let subject = format!("Host {} status is {}", alert.host_name, alert.host_state);

    let html_body = format!(
        r#"<html>
    <body>
        <table border=0 width='98%' cellpadding=0 cellspacing=0>
            <tr>
                <td valign='top'>
                    <br/>
                    <img width="216" height="85" src='{logo_url}'>
                </td>
            </tr>
        </table>

        <br/>

        <table border=0 cellpadding=0 cellspacing=0 width='98%'>
            <tr bgcolor={color}>
                <td width='140'><b><font color=#ffffff>Host: </font></b></td>
                <td><font color=#ffffff><b> {notify_type} [{host_state}]</b></font></td>
            </tr>
            <tr bgcolor=#eeeeee>
                <td><b>Hostname: </b></td>
                <td><b><a href='{url}/centreon/main.php?p=20202&o=hd&host_name={host_name}'>{host_alias}</a></b></td>
            </tr>
            <tr bgcolor=#fefefe>
                <td><b>IP: </b></td>
                <td><b>{host_address}</b></td>
            </tr>
            <tr bgcolor=#eeeeee>
                <td><b>Date/time: </b></td>
                <td>{date} {time}</td>
            </tr>
            <tr bgcolor=#fefefe>
                <td><b>Additional info: </b></td>
                <td><b>{host_output}</b></td>
            </tr>
            <tr bgcolor=#eeeeee>
                <td><b>Total hosts up: </b></td>
                <td><b>{total_up}</b></td>
            </tr>
            <tr bgcolor=#fefefe>
                <td><b>Total hosts down: </b></td>
                <td><b>{total_down}</b></td>
            </tr>
            <tr bgcolor=#fefefe>
                <td><i>Last status</i> duration: </td>
                <td><font color=#CC0000><b>{duration}</b></font></td>
            </tr>
        </table>
    </body>
</html>"#,
        logo_url = centreon.logo_url,
        color = color,
        notify_type = alert.notify_type,
        host_state = alert.host_state,
        url = centreon.url,
        host_name = alert.host_name,
        host_alias = alert.host_alias,
        host_address = alert.host_address,
        date = alert.date,
        time = alert.time,
        host_output = alert.host_output,
        total_up = alert.total_up,
        total_down = alert.total_down,
        duration = alert.duration,
    );

    let text_body = format!(
        r#"Host {host_name} status is {host_state}

Notification: {notify_type} [{host_state}]
Hostname: {host_alias}
IP: {host_address}
Date/time: {date} {time}
Additional info: {host_output}
Total hosts up: {total_up}
Total hosts down: {total_down}
Last status duration: {duration}"#,
        host_name = alert.host_name,
        host_state = alert.host_state,
        notify_type = alert.notify_type,
        host_alias = alert.host_alias,
        host_address = alert.host_address,
        date = alert.date,
        time = alert.time,
        host_output = alert.host_output,
        total_up = alert.total_up,
        total_down = alert.total_down,
        duration = alert.duration,
    );

    RenderedMessage {
        subject,
        html_body,
        text_body,
    }
}

/// Render a service state-change notification.
pub fn render_service(alert: &ServiceAlert, centreon: &CentreonConfig) -> RenderedMessage {
    let color = state_color(&alert.service_state);
    let subject = format!(
        "Service {} in host {} status is {}",
        alert.service_desc, alert.host_name, alert.service_state
    );

    let html_body = format!(
        r#"<html>
    <body>
        <img src='{logo_url}'>
        <br>
        <br>
        <table border=0 cellpadding=0 cellspacing=0 width=100%>
            <tr bgcolor={color}>
                <td width='140'><b><font color=#ffffff>Notification:</font></b></td>
                <td><font color=#ffffff><b>{service_state}</b></font></td>
            </tr>
            <tr bgcolor=#eeeeee>
                <td><b>Host:</b></td>
                <td><font color=#0000CC><b><a href='{url}/centreon/main.php?p=20202&o=hd&host_name={host_name}'>{host_alias}</a></b></font></td>
            </tr>
            <tr bgcolor=#fefefe>
                <td><b>Service:</b></td>
                <td><font color=#0000CC><b><a href='{url}/centreon/main.php?p=20201&o=svcd&host_name={host_name}&service_description={service_desc}'>{service_desc}</a></b></font></td>
            </tr>
            <tr bgcolor=#eeeeee>
                <td><b>IP:</b></td>
                <td><font color=#005555><b>{host_address}</b></font></td>
            </tr>
            <tr bgcolor=#fefefe>
                <td><b>Date/time:</b></td>
                <td><font color=#005555>{long_date_time}</font></td>
            </tr>
            <tr bgcolor=#eeeeee>
                <td><b>Additional info:</b></td>
                <td>{service_output}</td>
            </tr>
            <tr bgcolor=#fefefe>
                <td><b>Notified to:</b></td>
                <td><font color=#007700><b>{contact_email}</b></font></td>
            </tr>
        </table>
        <br>
        <br>
        <table border=0 cellpadding=0 cellspacing=0 width=100%>
            <tr bgcolor=#000055>
                <td><b><font color=#FFFFFF>Summary</font></b></td>
                <td></td>
            </tr>
            <tr bgcolor=#eeeeee>
                <td><b>Host group:</b></td>
                <td><b>{host_group_alias}</b></td>
            </tr>
            <tr bgcolor=#f6f6ff>
                <td>Total warning:</td>
                <td>{total_warning}</td>
            </tr>
            <tr bgcolor=#fffef6>
                <td>Total critical:</td>
                <td>{total_critical}</td>
            </tr>
            <tr bgcolor=#f6f6ff>
                <td>Total unknown:</td>
                <td>{total_unknown}</td>
            </tr>
            <tr bgcolor=#fffef6>
                <td>In <i>ALERT</i> for:</td>
                <td>{service_duration}</td>
            </tr>
        </table>
    </body>
</html>"#,
        logo_url = centreon.logo_url,
        color = color,
        service_state = alert.service_state,
        url = centreon.url,
        host_name = alert.host_name,
        host_alias = alert.host_alias,
        service_desc = alert.service_desc,
        host_address = alert.host_address,
        long_date_time = alert.long_date_time,
        service_output = alert.service_output,
        contact_email = alert.contact_email,
        host_group_alias = alert.host_group_alias,
        total_warning = alert.total_warning,
        total_critical = alert.total_critical,
        total_unknown = alert.total_unknown,
        service_duration = alert.service_duration,
    );

    let text_body = format!(
        r#"Service {service_desc} in host {host_name} status is {service_state}

Notification: {service_state}
Host: {host_alias}
Service: {service_desc}
IP: {host_address}
Date/time: {long_date_time}
Additional info: {service_output}
Notified to: {contact_email}

Host group: {host_group_alias}
Total warning: {total_warning}
Total critical: {total_critical}
Total unknown: {total_unknown}
In ALERT for: {service_duration}"#,
        service_desc = alert.service_desc,
        host_name = alert.host_name,
        service_state = alert.service_state,
        host_alias = alert.host_alias,
        host_address = alert.host_address,
        long_date_time = alert.long_date_time,
        service_output = alert.service_output,
        contact_email = alert.contact_email,
        host_group_alias = alert.host_group_alias,
        total_warning = alert.total_warning,
        total_critical = alert.total_critical,
        total_unknown = alert.total_unknown,
        service_duration = alert.service_duration,
    );

    RenderedMessage {
        subject,
        html_body,
        text_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_alert() -> HostAlert {
        HostAlert {
            notify_type: "PROBLEM".to_string(),
            host_name: "web01".to_string(),
            host_alias: "Web frontend".to_string(),
            host_group_alias: "ACME".to_string(),
            host_state: "DOWN".to_string(),
            host_address: "10.20.30.45".to_string(),
            host_output: "CRITICAL - Host Unreachable (10.20.30.45)".to_string(),
            recipient_email: "oncall@example.com".to_string(),
            total_up: "41".to_string(),
            total_down: "1".to_string(),
            duration: "0d 0h 5m 12s".to_string(),
            date: "2025-05-02".to_string(),
            time: "11:37:40".to_string(),
        }
    }

    fn service_alert() -> ServiceAlert {
        ServiceAlert {
            host_name: "web01".to_string(),
            host_alias: "Web frontend".to_string(),
            host_address: "10.20.30.45".to_string(),
            service_desc: "HTTP".to_string(),
            service_state: "CRITICAL".to_string(),
            service_output: "HTTP CRITICAL: 503 Service Unavailable".to_string(),
            long_date_time: "Fri May 2 11:37:40 CEST 2025".to_string(),
            service_duration: "0d 0h 0m 19s".to_string(),
            contact_email: "oncall@example.com".to_string(),
            total_warning: "0".to_string(),
            total_critical: "1".to_string(),
            total_unknown: "0".to_string(),
            host_group_alias: "ACME".to_string(),
        }
    }

    fn centreon() -> CentreonConfig {
        CentreonConfig {
            url: "https://monitoring.example.com".to_string(),
            logo_url: "https://monitoring.example.com/img/logo.png".to_string(),
        }
    }

    #[test]
    fn test_host_subject_template() {
        let rendered = render_host(&host_alert(), &centreon());
        assert_eq!(rendered.subject, "Host web01 status is DOWN");
    }

    #[test]
    fn test_service_subject_template() {
        let rendered = render_service(&service_alert(), &centreon());
        assert_eq!(
            rendered.subject,
            "Service HTTP in host web01 status is CRITICAL"
        );
    }

    #[test]
    fn test_host_html_contains_fields_verbatim() {
        let alert = host_alert();
        let rendered = render_host(&alert, &centreon());

        assert!(rendered.html_body.contains("<tr bgcolor=red>"));
        assert!(rendered.html_body.contains("PROBLEM [DOWN]"));
        assert!(rendered.html_body.contains("Web frontend"));
        assert!(rendered.html_body.contains("10.20.30.45"));
        assert!(rendered.html_body.contains("2025-05-02 11:37:40"));
        assert!(rendered
            .html_body
            .contains("CRITICAL - Host Unreachable (10.20.30.45)"));
        assert!(rendered.html_body.contains("41"));
        assert!(rendered.html_body.contains("0d 0h 5m 12s"));
        assert!(rendered
            .html_body
            .contains("host_name=web01'>Web frontend</a>"));
    }

    #[test]
    fn test_service_html_contains_fields_verbatim() {
        let alert = service_alert();
        let rendered = render_service(&alert, &centreon());

        assert!(rendered.html_body.contains("<tr bgcolor=red>"));
        assert!(rendered
            .html_body
            .contains("HTTP CRITICAL: 503 Service Unavailable"));
        assert!(rendered.html_body.contains("oncall@example.com"));
        assert!(rendered.html_body.contains("ACME"));
        assert!(rendered.html_body.contains("0d 0h 0m 19s"));
        assert!(rendered
            .html_body
            .contains("service_description=HTTP'>HTTP</a>"));
    }

    #[test]
    fn test_unknown_state_renders_gray_band() {
        let mut alert = service_alert();
        alert.service_state = "FLAPPING".to_string();
        let rendered = render_service(&alert, &centreon());
        assert!(rendered.html_body.contains("<tr bgcolor=gray>"));
    }

    // Markup in plugin output survives untouched; values are interpolated
    // without HTML escaping.
    #[test]
    fn test_fields_interpolated_without_escaping() {
        let mut alert = host_alert();
        alert.host_output = "<b>disk</b> usage > 95% & rising".to_string();
        let rendered = render_host(&alert, &centreon());
        assert!(rendered
            .html_body
            .contains("<b>disk</b> usage > 95% & rising"));
    }

    #[test]
    fn test_text_body_mirrors_fields() {
        let rendered = render_service(&service_alert(), &centreon());
        assert!(rendered.text_body.contains("Host: Web frontend"));
        assert!(rendered.text_body.contains("Service: HTTP"));
        assert!(rendered.text_body.contains("Total critical: 1"));
        assert!(rendered.text_body.contains("In ALERT for: 0d 0h 0m 19s"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let alert = host_alert();
        let links = centreon();
        assert_eq!(render_host(&alert, &links), render_host(&alert, &links));
    }
}
