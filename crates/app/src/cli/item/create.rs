use clap::Args;
use rust_decimal::Decimal;
use shopfront_app::{
    database::{self, Db},
    items::{PgItemsRepository, models::NewItem},
};

#[derive(Debug, Args)]
pub(crate) struct CreateItemArgs {
    /// Item display name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. `19.99`
    #[arg(long)]
    price: Decimal,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateItemArgs) -> Result<(), String> {
    if args.price.is_sign_negative() {
        return Err("price cannot be negative".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let repository = PgItemsRepository::new(Db::new(pool));

    let item = repository
        .create_item(NewItem {
            name: args.name,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create item: {error}"))?;

    println!("item_id: {}", item.id);
    println!("name: {}", item.name);
    println!("price: {}", item.price);

    Ok(())
}
