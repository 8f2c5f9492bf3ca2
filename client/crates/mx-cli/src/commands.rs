use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the current session after checking it with the server
    Whoami,

    /// Complete a Google sign-in from the callback URL the browser landed on
    Callback {
        /// Full callback URL or just its query string
        url: String,
    },

    /// Ask the route guard what happens when navigating to a route
    Open {
        /// Route path, e.g. "/" or "/login"
        route: String,
    },

    /// Print the URL that starts a Google sign-in
    OauthUrl,
}
