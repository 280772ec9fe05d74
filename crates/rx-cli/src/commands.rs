use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Exchange username/password for a session credential
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Tenant slug; omit for the superadmin login
        #[arg(long)]
        tenant: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Evaluate a browser URL against the stored session
    Resolve {
        /// Full URL, e.g. https://acme.example.com/dashboard?token=...
        url: String,
    },

    /// Show the stored credential's unverified claims
    Status,

    /// Authenticated GET against an API route
    Get {
        /// Route, e.g. /api/v1/inventory
        path: String,
    },
}
