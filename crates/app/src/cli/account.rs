use clap::Args;
use surgihub_app::{
    api::{Credentials, Registration},
    context::AppContext,
};

use crate::cli::failure;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "SURGIHUB_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "SURGIHUB_PASSWORD", hide_env_values = true)]
    password: String,

    /// Full name
    #[arg(long)]
    full_name: String,

    /// Contact phone number
    #[arg(long)]
    phone: String,
}

pub(crate) async fn login(context: &AppContext, args: LoginArgs) -> Result<(), String> {
    let mut session = context.session.clone();

    context
        .accounts()
        .login(
            &mut session,
            &Credentials {
                email: args.email,
                password: args.password,
            },
        )
        .await
        .map_err(|error| failure("login failed", &error))?;

    if let Some(user) = session.user() {
        println!("user_id: {}", user.id);
        println!("admin: {}", user.is_admin());
    }

    if let Some(token) = session.token() {
        println!("token: {token}");
        println!("export SURGIHUB_TOKEN to stay signed in");
    }

    Ok(())
}

pub(crate) async fn register(context: &AppContext, args: RegisterArgs) -> Result<(), String> {
    context
        .accounts()
        .register(&Registration {
            email: args.email,
            password: args.password,
            full_name: args.full_name,
            phone: args.phone,
        })
        .await
        .map_err(|error| failure("registration failed", &error))?;

    println!("account created, you can now log in");

    Ok(())
}
