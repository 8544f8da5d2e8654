//! Interactive wallet shell
//!
//! One session per run: wallets live in memory and are gone on `quit`.
//! Positions typed by the user are 1-based, matching the "Wallet n" labels.

use super::balance::refresh_session;
use super::common::{load_mnemonic, print_wallet, Fallback};
use crate::client_config::ClientConfig;
use anyhow::{anyhow, bail, Result};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use walletgen_types::{Chain, KeyVisibility};
use walletgen_wallet::Session;

const HELP: &str = "\
Commands:
  add <chain>            derive and append the next wallet (chain: solana|ethereum)
  delete <chain> <n>     delete Wallet n (1-based)
  list [chain]           show wallets, keys (masked unless toggled) and balances
  toggle <chain> [n]     show or hide private keys for a chain, or for Wallet n
  balances [chain]       refresh balances from the configured RPC nodes
  mnemonic               print the session mnemonic
  help                   show this message
  quit                   leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `add <chain>`
    Add(Chain),
    /// `delete <chain> <n>`, `n` 1-based
    Delete(Chain, usize),
    /// `list [chain]`
    List(Option<Chain>),
    /// `toggle <chain> [n]`, `n` 1-based
    Toggle(Chain, Option<usize>),
    /// `balances [chain]`
    Balances(Option<Chain>),
    /// `mnemonic`
    Mnemonic,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let chain = |arg: Option<&&str>| -> Result<Chain> {
            let arg = arg.ok_or_else(|| anyhow!("missing chain (solana|ethereum)"))?;
            Chain::from_str(arg).map_err(|e| anyhow!("{}", e))
        };
        let position = |arg: Option<&&str>| -> Result<usize> {
            let n: usize = arg
                .ok_or_else(|| anyhow!("missing wallet number"))?
                .parse()
                .map_err(|_| anyhow!("wallet number must be a positive integer"))?;
            if n == 0 {
                bail!("wallet numbers start at 1");
            }
            Ok(n)
        };
        let optional_chain = |arg: Option<&&str>| -> Result<Option<Chain>> {
            arg.map(|a| Chain::from_str(a).map_err(|e| anyhow!("{}", e)))
                .transpose()
        };

        let parsed = match command.as_str() {
            "add" => ShellCommand::Add(chain(args.first())?),
            "delete" | "del" | "rm" => {
                ShellCommand::Delete(chain(args.first())?, position(args.get(1))?)
            }
            "list" | "ls" => ShellCommand::List(optional_chain(args.first())?),
            "toggle" => {
                let n = args.get(1).map(|arg| position(Some(arg))).transpose()?;
                ShellCommand::Toggle(chain(args.first())?, n)
            }
            "balances" | "balance" => ShellCommand::Balances(optional_chain(args.first())?),
            "mnemonic" => ShellCommand::Mnemonic,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command '{}', type 'help'", other),
        };

        Ok(parsed)
    }
}

fn chains(selected: Option<Chain>) -> Vec<Chain> {
    selected.map_or_else(|| Chain::ALL.to_vec(), |chain| vec![chain])
}

fn list(session: &Session, chain: Chain) -> Result<()> {
    println!(
        "{} wallets ({}, keys {})",
        chain,
        session.wallets(chain).len(),
        visibility_word(session.visibility(chain))
    );

    for (position, wallet) in session.wallets(chain).iter().enumerate() {
        print_wallet(
            &format!("Wallet {}", position + 1),
            wallet,
            session.wallet_visibility(chain, position)?,
            Some(session.balances().get(&wallet.address)),
        );
    }
    Ok(())
}

fn visibility_word(visibility: KeyVisibility) -> &'static str {
    match visibility {
        KeyVisibility::Shown => "shown",
        KeyVisibility::Hidden => "hidden",
    }
}

/// Apply one command; `Ok(false)` ends the shell
async fn apply(config: &ClientConfig, session: &mut Session, command: ShellCommand) -> Result<bool> {
    match command {
        ShellCommand::Add(chain) => {
            let wallet = session.append_next(chain)?;
            let index = wallet.index;
            let address = wallet.address.clone();
            let n = session.wallets(chain).len();
            println!("Added {} Wallet {} (index {}): {}", chain, n, index, address);
        }
        ShellCommand::Delete(chain, n) => {
            let wallet = session.delete(chain, n - 1)?;
            println!(
                "Deleted {} Wallet {} (index {}): {}",
                chain, n, wallet.index, wallet.address
            );
        }
        ShellCommand::List(selected) => {
            for chain in chains(selected) {
                list(session, chain)?;
            }
        }
        ShellCommand::Toggle(chain, None) => {
            let visibility = session.toggle_visibility(chain);
            println!(
                "{} private keys are now {}",
                chain,
                visibility_word(visibility)
            );
        }
        ShellCommand::Toggle(chain, Some(n)) => {
            let visibility = session.toggle_wallet_visibility(chain, n - 1)?;
            println!(
                "{} Wallet {} private key is now {}",
                chain,
                n,
                visibility_word(visibility)
            );
        }
        ShellCommand::Balances(selected) => {
            for chain in chains(selected) {
                refresh_session(config, session, chain).await?;
                for wallet in session.wallets(chain) {
                    println!(
                        "{}  {}",
                        wallet.address,
                        session.balances().get(&wallet.address)
                    );
                }
            }
        }
        ShellCommand::Mnemonic => println!("{}", session.mnemonic().phrase()),
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Execute `shell`
pub async fn execute(config: &ClientConfig, mnemonic_file: Option<&Path>) -> Result<()> {
    let mnemonic = load_mnemonic(mnemonic_file, Fallback::Generate)?;
    let mut session = Session::new(mnemonic);

    println!("walletgen shell. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("walletgen> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let keep_going = match line.parse::<ShellCommand>() {
            Ok(command) => apply(config, &mut session, command).await,
            Err(e) => Err(e),
        };

        match keep_going {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}
