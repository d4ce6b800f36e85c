use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{cps, emc, emctext, msc, pak, scene, wsa};

#[derive(Parser)]
#[command(name = "kyra-toolkit")]
#[command(about = "Extracts Kyrandia-family DOS assets into PNG/JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// CPS image operations (Decode to PNG)
    #[command(subcommand)]
    Cps(cps::CpsCommands),
    /// MSC image operations (Decode to PNG)
    #[command(subcommand)]
    Msc(msc::MscCommands),
    /// WSA animation operations (Decode to PNG frames)
    #[command(subcommand)]
    Wsa(wsa::WsaCommands),
    /// PAK archive operations (Unpack)
    #[command(subcommand)]
    Pak(pak::PakCommands),
    /// EMC2 static-trace operations (Decode draw/drop calls to JSON)
    #[command(subcommand)]
    Emc(emc::EmcCommands),
    /// Scene metadata operations (Decode .DAT to JSON)
    #[command(subcommand)]
    Scene(scene::SceneCommands),
    /// EMC2 TEXT string table operations (Decode to JSON)
    #[command(subcommand)]
    EmcText(emctext::EmcTextCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cps(cmd) => cps::handle(cmd),
        Commands::Msc(cmd) => msc::handle(cmd),
        Commands::Wsa(cmd) => wsa::handle(cmd),
        Commands::Pak(cmd) => pak::handle(cmd),
        Commands::Emc(cmd) => emc::handle(cmd),
        Commands::Scene(cmd) => scene::handle(cmd),
        Commands::EmcText(cmd) => emctext::handle(cmd),
    }
}
