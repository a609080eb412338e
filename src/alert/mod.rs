//! Alert records for Centreon host and service notifications.
//!
//! Centreon expands its notification macros into the command line of the
//! notification command, so every field arrives as a plain string and is
//! carried through to the rendered email unchanged. Aggregate counts stay
//! strings for the same reason: the rendering is pass-through.

use clap::Args;

/// One host state-change event, built from CLI input and discarded after the
/// message is sent.
#[derive(Args, Debug, Clone)]
pub struct HostAlert {
    /// Notification type ($NOTIFICATIONTYPE$, e.g. PROBLEM or RECOVERY)
    #[arg(long)]
    pub notify_type: String,

    /// Host name ($HOSTNAME$)
    #[arg(long)]
    pub host_name: String,

    /// Host alias ($HOSTALIAS$)
    #[arg(long)]
    pub host_alias: String,

    /// Host group alias ($HOSTGROUPALIAS$)
    #[arg(long)]
    pub host_group_alias: String,

    /// Current host state ($HOSTSTATE$, e.g. UP or DOWN)
    #[arg(long)]
    pub host_state: String,

    /// Host IP address ($HOSTADDRESS$)
    #[arg(long)]
    pub host_address: String,

    /// Plugin output for the host check ($HOSTOUTPUT$)
    #[arg(long)]
    pub host_output: String,

    /// Email address of the contact to notify ($CONTACTEMAIL$)
    #[arg(long)]
    pub recipient_email: String,

    /// Total hosts currently up ($TOTALHOSTSUP$)
    #[arg(long)]
    pub total_up: String,

    /// Total hosts currently down ($TOTALHOSTSDOWN$)
    #[arg(long)]
    pub total_down: String,

    /// Duration of the current state ($HOSTDURATION$)
    #[arg(long)]
    pub duration: String,

    /// Date of the notification ($DATE$)
    #[arg(long)]
    pub date: String,

    /// Time of the notification ($TIME$)
    #[arg(long)]
    pub time: String,
}

/// One service state-change event.
#[derive(Args, Debug, Clone)]
pub struct ServiceAlert {
    /// Host name ($HOSTNAME$)
    #[arg(long)]
    pub host_name: String,

    /// Host alias ($HOSTALIAS$)
    #[arg(long)]
    pub host_alias: String,

    /// Host IP address ($HOSTADDRESS$)
    #[arg(long)]
    pub host_address: String,

    /// Service description ($SERVICEDESC$)
    #[arg(long)]
    pub service_desc: String,

    /// Current service state ($SERVICESTATE$, e.g. OK, WARNING, CRITICAL, UNKNOWN)
    #[arg(long)]
    pub service_state: String,

    /// Plugin output for the service check ($SERVICEOUTPUT$)
    #[arg(long)]
    pub service_output: String,

    /// Date and time of the notification ($LONGDATETIME$)
    #[arg(long)]
    pub long_date_time: String,

    /// Duration of the current state ($SERVICEDURATION$)
    #[arg(long)]
    pub service_duration: String,

    /// Email address of the contact to notify ($CONTACTEMAIL$)
    #[arg(long)]
    pub contact_email: String,

    /// Total services in WARNING state ($TOTALSERVICESWARNING$)
    #[arg(long)]
    pub total_warning: String,

    /// Total services in CRITICAL state ($TOTALSERVICESCRITICAL$)
    #[arg(long)]
    pub total_critical: String,

    /// Total services in UNKNOWN state ($TOTALSERVICESUNKNOWN$)
    #[arg(long)]
    pub total_unknown: String,

    /// Host group alias ($HOSTGROUPALIAS$)
    #[arg(long)]
    pub host_group_alias: String,
}

/// Color band for a host or service state.
///
/// Case-sensitive: Centreon emits upper-case state macros, and anything
/// unrecognized falls back to gray rather than erroring.
pub fn state_color(state: &str) -> &'static str {
    match state {
        "OK" => "green",
        "WARNING" => "orange",
        "CRITICAL" | "DOWN" => "red",
        _ => "gray",
    }
}
