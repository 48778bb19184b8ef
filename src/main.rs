use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use moment_admin::api::auth::{self, CaptchaAnswer, EmailCodeRequest, EmailRequest, LoginError, LoginRequest, ResetPasswordRequest};
use moment_admin::api::post::{self, PostId, PostIds, PostStatusUpdate};
use moment_admin::api::report::{self, CommentId, ReportFilter, ReportId, ReportVerdict};
use moment_admin::api::tag::{self, NewTag, TagSearch};
use moment_admin::api::user::{self, BatchUserStatusUpdate, UserAuthReview, UserIdQuery, UserSearch, UserStatusUpdate};
use moment_admin::api::{PageQuery, audit};
use moment_admin::config::{ClientConfig, ConfigError};
use moment_admin::navigate::Navigator;
use moment_admin::notify::NotificationSink;
use moment_admin::router::{self, GuardDecision, RouteGuard};
use moment_admin::session::{FileTokenStore, SessionContext, StoreError};
use moment_admin::util::date::format_date_time;
use moment_admin::{ApiClient, ApiError};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// Backend failures were already shown by the terminal sink.
    fn already_reported(&self) -> bool {
        match self {
            Self::Api(error) | Self::Login(LoginError::Api(error)) => !matches!(error, ApiError::InvalidParams(_)),
            _ => false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "moment-admin", about = "Admin console for the moments platform")]
struct Cli {
    /// Overrides ADMIN_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides ADMIN_TIMEOUT_SECS.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Overrides ADMIN_STORAGE_PATH.
    #[arg(long)]
    storage_path: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the issued token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password_hash: String,
    },
    Logout,
    /// Show whether a token is stored.
    Status,
    /// Check whether a console path would be shown or sent to login.
    Route {
        path: String,
    },
    FormatDate {
        value: Option<String>,
        #[arg(long)]
        format: Option<String>,
    },
    Captcha {
        #[command(subcommand)]
        command: CaptchaSubcommand,
    },
    Password {
        #[command(subcommand)]
        command: PasswordSubcommand,
    },
    User {
        #[command(subcommand)]
        command: UserSubcommand,
    },
    Post {
        #[command(subcommand)]
        command: PostSubcommand,
    },
    Tag {
        #[command(subcommand)]
        command: TagSubcommand,
    },
    Report {
        #[command(subcommand)]
        command: ReportSubcommand,
    },
    Audit {
        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    size: Option<u32>,
}

impl From<PageArgs> for PageQuery {
    fn from(args: PageArgs) -> Self {
        Self { page: args.page, size: args.size }
    }
}

#[derive(Subcommand, Debug)]
enum CaptchaSubcommand {
    Generate,
    Verify {
        #[arg(long)]
        id: String,
        #[arg(long)]
        code: String,
    },
}

#[derive(Subcommand, Debug)]
enum PasswordSubcommand {
    Forgot {
        #[arg(long)]
        email: String,
    },
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
    },
    Reset {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        is_admin: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    Profile {
        user_id: i64,
    },
    Status {
        user_id: i64,
        #[arg(long)]
        account_status: i32,
    },
    VerifyAuth {
        user_id: i64,
        #[arg(long)]
        auth_status: i32,
    },
    Search {
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        school: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        auth_status: Option<i32>,
        #[arg(long)]
        account_status: Option<i32>,
        #[command(flatten)]
        paging: PageArgs,
    },
    Stats,
    BatchStatus {
        #[arg(long, value_delimiter = ',', required = true)]
        user_ids: Vec<i64>,
        #[arg(long)]
        account_status: i32,
    },
    Online,
    NewStats,
    Page {
        #[command(flatten)]
        paging: PageArgs,
    },
    AuthDetail {
        user_id: i64,
    },
    PendingAuth {
        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
enum PostSubcommand {
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    Detail {
        post_id: i64,
    },
    Status {
        post_id: i64,
        #[arg(long)]
        status: i32,
    },
    Delete {
        post_id: i64,
    },
    ToggleBlock {
        post_id: i64,
    },
    Stats,
    BatchDelete {
        #[arg(long, value_delimiter = ',', required = true)]
        post_ids: Vec<i64>,
    },
}

#[derive(Subcommand, Debug)]
enum TagSubcommand {
    List,
    Create {
        name: String,
        #[arg(long)]
        tag_type: Option<i32>,
    },
    Search {
        name: String,
    },
    Delete {
        tag_id: i64,
    },
    Stats,
}

#[derive(Subcommand, Debug)]
enum ReportSubcommand {
    Pending {
        #[command(flatten)]
        paging: PageArgs,
    },
    Filter {
        #[command(flatten)]
        paging: PageArgs,
        #[arg(long)]
        target_type: Option<i32>,
        #[arg(long)]
        status: Option<i32>,
        #[arg(long)]
        start_time: Option<String>,
        #[arg(long)]
        end_time: Option<String>,
    },
    Detail {
        report_id: i64,
    },
    Comment {
        comment_id: i64,
    },
    Handle {
        report_id: i64,
        #[arg(long)]
        status: i32,
        #[arg(long)]
        admin_id: i64,
    },
}

struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn hard_redirect(&self, path: &str) {
        eprintln!("session cleared; sign in again with `moment-admin login` ({path})");
    }

    fn redirect(&self, path: &str) {
        eprintln!("redirected to {path}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if !error.already_reported() {
                eprintln!("error: {error}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).with_target(false).init();
}

fn apply_cli_overrides(mut config: ClientConfig, cli: &Cli) -> Result<ClientConfig, ConfigError> {
    if let Some(base_url) = &cli.base_url {
        config.base_url = ClientConfig::new(base_url)?.base_url;
    }
    if let Some(secs) = cli.timeout_secs.filter(|secs| *secs > 0) {
        config.request_timeout = Duration::from_secs(secs);
    }
    if let Some(path) = &cli.storage_path {
        config.storage_path.clone_from(path);
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = apply_cli_overrides(ClientConfig::from_env()?, &cli)?;
    let session = SessionContext::new(FileTokenStore::open(&config.storage_path)?);
    let navigator: Arc<dyn Navigator> = Arc::new(TerminalNavigator);
    let client = ApiClient::new(&config, session.clone())?
        .with_sink(Arc::new(TerminalSink))
        .with_navigator(navigator.clone());

    let payload = match cli.command {
        Command::Login { email, password_hash } => {
            auth::login(&client, &LoginRequest { email, password_hash }).await?;
            println!("logged in");
            return Ok(());
        }
        Command::Logout => {
            auth::logout(&client)?;
            println!("logged out");
            return Ok(());
        }
        Command::Status => {
            println!("{:?}", session.state());
            return Ok(());
        }
        Command::Route { path } => {
            run_route(&RouteGuard::new(session, navigator), &path);
            return Ok(());
        }
        Command::FormatDate { value, format } => {
            println!("{}", format_date_time(value.as_deref(), format.as_deref()));
            return Ok(());
        }
        Command::Captcha { command } => run_captcha(&client, command).await?,
        Command::Password { command } => run_password(&client, command).await?,
        Command::User { command } => run_user(&client, command).await?,
        Command::Post { command } => run_post(&client, command).await?,
        Command::Tag { command } => run_tag(&client, command).await?,
        Command::Report { command } => run_report(&client, command).await?,
        Command::Audit { paging } => audit::get_audit_logs(&client, paging.into()).await?,
    };
    print_json(&payload)
}

fn run_route(guard: &RouteGuard, path: &str) {
    let found = router::resolve(path);
    match guard.navigate(path) {
        GuardDecision::Proceed => match found {
            Some(found) => {
                let title = found.meta.title.unwrap_or("-");
                println!("proceed: {:?} (title: {title}, params: {:?})", found.view, found.params);
            }
            None => println!("proceed: no matching view"),
        },
        GuardDecision::Redirect(target) => println!("redirect: {target}"),
    }
}

async fn run_captcha(client: &ApiClient, command: CaptchaSubcommand) -> Result<Value, ApiError> {
    match command {
        CaptchaSubcommand::Generate => auth::generate_captcha(client).await,
        CaptchaSubcommand::Verify { id, code } => {
            auth::verify_captcha(client, &CaptchaAnswer { captcha_id: id, captcha_code: code }).await
        }
    }
}

async fn run_password(client: &ApiClient, command: PasswordSubcommand) -> Result<Value, ApiError> {
    match command {
        PasswordSubcommand::Forgot { email } => auth::request_password_reset(client, &EmailRequest { email }).await,
        PasswordSubcommand::Verify { email, code } => {
            auth::verify_email_code(client, &EmailCodeRequest { email, code }).await
        }
        PasswordSubcommand::Reset { email, code, new_password, is_admin } => {
            auth::reset_password(client, &ResetPasswordRequest { email, code, new_password, is_admin }).await
        }
    }
}

async fn run_user(client: &ApiClient, command: UserSubcommand) -> Result<Value, ApiError> {
    match command {
        UserSubcommand::Profile { user_id } => user::get_user_public_profile(client, UserIdQuery { user_id }).await,
        UserSubcommand::Status { user_id, account_status } => {
            user::update_user_status(client, UserStatusUpdate { user_id, account_status }).await
        }
        UserSubcommand::VerifyAuth { user_id, auth_status } => {
            user::verify_user_auth(client, UserAuthReview { user_id, auth_status }).await
        }
        UserSubcommand::Search { nickname, email, school, department, auth_status, account_status, paging } => {
            let search =
                UserSearch { nickname, email, school, department, auth_status, account_status, paging: paging.into() };
            user::search_users(client, &search).await
        }
        UserSubcommand::Stats => user::get_user_statistics(client).await,
        UserSubcommand::BatchStatus { user_ids, account_status } => {
            user::batch_update_user_status(client, &BatchUserStatusUpdate { user_ids, account_status }).await
        }
        UserSubcommand::Online => user::get_online_user_count(client).await,
        UserSubcommand::NewStats => user::get_new_user_stats(client).await,
        UserSubcommand::Page { paging } => user::page_users(client, paging.into()).await,
        UserSubcommand::AuthDetail { user_id } => user::get_user_auth_detail(client, UserIdQuery { user_id }).await,
        UserSubcommand::PendingAuth { paging } => user::get_pending_auth_users(client, paging.into()).await,
    }
}

async fn run_post(client: &ApiClient, command: PostSubcommand) -> Result<Value, ApiError> {
    match command {
        PostSubcommand::List { paging } => post::get_post_list(client, paging.into()).await,
        PostSubcommand::Detail { post_id } => post::get_post_detail(client, PostId { post_id }).await,
        PostSubcommand::Status { post_id, status } => {
            post::update_post_status(client, PostStatusUpdate { post_id, status }).await
        }
        PostSubcommand::Delete { post_id } => post::delete_post(client, PostId { post_id }).await,
        PostSubcommand::ToggleBlock { post_id } => post::toggle_post_block(client, PostId { post_id }).await,
        PostSubcommand::Stats => post::get_post_statistics(client).await,
        PostSubcommand::BatchDelete { post_ids } => post::batch_delete_posts(client, &PostIds { post_ids }).await,
    }
}

async fn run_tag(client: &ApiClient, command: TagSubcommand) -> Result<Value, ApiError> {
    match command {
        TagSubcommand::List => tag::get_all_tags(client).await,
        TagSubcommand::Create { name, tag_type } => tag::create_system_tag(client, &NewTag { name, tag_type }).await,
        TagSubcommand::Search { name } => tag::search_tags(client, &TagSearch { name }).await,
        TagSubcommand::Delete { tag_id } => tag::delete_tag(client, tag_id).await,
        TagSubcommand::Stats => tag::get_tag_statistics(client).await,
    }
}

async fn run_report(client: &ApiClient, command: ReportSubcommand) -> Result<Value, ApiError> {
    match command {
        ReportSubcommand::Pending { paging } => {
            let filter = ReportFilter { page: paging.page, size: paging.size, ..ReportFilter::default() };
            report::get_pending_reports(client, &filter).await
        }
        ReportSubcommand::Filter { paging, target_type, status, start_time, end_time } => {
            let filter =
                ReportFilter { page: paging.page, size: paging.size, target_type, status, start_time, end_time };
            report::filter_reports(client, &filter).await
        }
        ReportSubcommand::Detail { report_id } => report::get_report_detail(client, ReportId { report_id }).await,
        ReportSubcommand::Comment { comment_id } => report::get_comment_detail(client, CommentId { comment_id }).await,
        ReportSubcommand::Handle { report_id, status, admin_id } => {
            report::handle_report(client, ReportVerdict { report_id, status, admin_id }).await
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
