use clap::Args;
use shopfront_app::{
    database::{self, Db},
    users::{PgUsersRepository, models::NewUser},
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Username the cart endpoints will address
    #[arg(long)]
    username: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    if args.username.trim().is_empty() {
        return Err("username cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let repository = PgUsersRepository::new(Db::new(pool));

    let user = repository
        .create_user(NewUser {
            username: args.username,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_id: {}", user.id);
    println!("username: {}", user.username);
    println!("cart_id: {}", user.cart.id());

    Ok(())
}
