use super::Gate;
use anyhow::{bail, Result};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "STUDIO_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct ResetPasswordArgs {
    /// Account email
    #[arg(long)]
    email: String,
}

pub(crate) async fn login(gate: &Gate, args: LoginArgs) -> Result<()> {
    let principal = gate.login(&args.email, &args.password).await?;
    println!(
        "Logged in as {} <{}> ({})",
        principal.name, principal.email, principal.role
    );
    Ok(())
}

pub(crate) fn logout(gate: &Gate) -> Result<()> {
    gate.logout()?;
    println!("Logged out");
    Ok(())
}

pub(crate) fn whoami(gate: &Gate) -> Result<()> {
    match gate.principal() {
        Some(principal) => {
            println!("{} <{}>", principal.name, principal.email);
            println!("id:   {}", principal.id);
            println!("role: {}", principal.role);
            Ok(())
        }
        None => bail!("Not logged in. Run `studio login` first."),
    }
}

pub(crate) async fn reset_password(gate: &Gate, args: ResetPasswordArgs) -> Result<()> {
    let message = gate.request_password_reset(&args.email).await?;
    println!("{}", message);
    Ok(())
}
