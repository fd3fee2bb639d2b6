use crate::api::{Balance, ExplorerClient, TransactionRecord, TxListQuery};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Balance,
    LastBlock,
    LastTransactions,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Balance,
        MenuChoice::LastBlock,
        MenuChoice::LastTransactions,
        MenuChoice::Exit,
    ];

    /// Parse the user's pick, `1` through `4`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Balance),
            "2" => Some(Self::LastBlock),
            "3" => Some(Self::LastTransactions),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            Self::Balance => '1',
            Self::LastBlock => '2',
            Self::LastTransactions => '3',
            Self::Exit => '4',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Balance => "Check the balance of an Ethereum address",
            Self::LastBlock => "Get the latest block number",
            Self::LastTransactions => "Get the latest transactions of an Ethereum address",
            Self::Exit => "Exit",
        }
    }
}

/// Read-eval-print loop over any line-based input and output.
///
/// The binary wires this to stdin/stdout; tests use in-memory buffers.
pub struct Menu<R, W> {
    client: ExplorerClient,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(client: ExplorerClient, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit or input ends. Only terminal I/O
    /// errors escape; API failures are printed and the loop continues.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_options()?;

            let Some(line) = self.prompt("Choose an option (1-4): ")? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::Balance) => self.show_balance().await?,
                Some(MenuChoice::LastBlock) => self.show_last_block().await?,
                Some(MenuChoice::LastTransactions) => self.show_last_transactions().await?,
                None => writeln!(self.output, "Didn't understand {line:?}, please try again.")?,
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- ethscan ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Print `text`, read one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn show_balance(&mut self) -> io::Result<()> {
        let Some(address) = self.prompt("Enter an Ethereum address: ")? else {
            return Ok(());
        };

        debug!(%address, "balance lookup");
        match self.client.get_balance(&address).await {
            Ok(balance) => write!(self.output, "{}", format_balance(&address, &balance)),
            Err(e) => writeln!(self.output, "Failed to retrieve the balance: {e}"),
        }
    }

    async fn show_last_block(&mut self) -> io::Result<()> {
        match self.client.get_last_block().await {
            Ok(number) => writeln!(self.output, "Latest block number: {number}"),
            Err(e) => writeln!(self.output, "Failed to retrieve the latest block: {e}"),
        }
    }

    async fn show_last_transactions(&mut self) -> io::Result<()> {
        let Some(address) = self.prompt("Enter an Ethereum address: ")? else {
            return Ok(());
        };
        let Some(count) = self.prompt("How many transactions should be shown? ")? else {
            return Ok(());
        };
        let Some(count) = parse_count(&count) else {
            return writeln!(
                self.output,
                "{count:?} is not a valid count, enter a whole number greater than zero."
            );
        };

        debug!(%address, count, "transaction lookup");
        match self
            .client
            .get_last_transactions(&address, TxListQuery::default())
            .await
        {
            Ok(transactions) => {
                let shown = &transactions[..count.min(transactions.len())];
                writeln!(
                    self.output,
                    "Last {} transactions for {address}:",
                    shown.len()
                )?;
                for (i, tx) in shown.iter().enumerate() {
                    write!(self.output, "{}", format_transaction(i + 1, tx))?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.output, "Failed to retrieve the transactions: {e}"),
        }
    }
}

/// A transaction count typed at the prompt: a positive whole number.
pub fn parse_count(input: &str) -> Option<usize> {
    input.trim().parse().ok().filter(|&n| n > 0)
}

pub fn format_balance(address: &str, balance: &Balance) -> String {
    format!(
        "Balance for {address}:\n  - Wei: {}\n  - Ether: {}\n",
        balance.wei,
        balance.ether_exact()
    )
}

pub fn format_transaction(index: usize, tx: &TransactionRecord) -> String {
    let value = match tx.value_ether() {
        Some(ether) => format!("{ether} Ether"),
        None => format!("{} (unparsed)", tx.value),
    };
    let to = if tx.to.is_empty() {
        "(contract creation)"
    } else {
        tx.to.as_str()
    };

    format!(
        "\nTransaction {index}:\n  Hash: {}\n  From: {}\n  To: {to}\n  Value: {value}\n  Block: {}\n",
        tx.hash, tx.from, tx.block_number
    )
}
