use clap::Parser;
use rsffi::{
    platform, ByReference, ByteOrder, FfiConfig, FfiError, FloatByReference, NativeLong,
    NativeLongByReference,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Native long size in bytes (4 or 8), overriding the host
    #[arg(short, long)]
    long_size: Option<usize>,

    /// Byte order used when marshaling: native, big or little
    #[arg(short, long)]
    byte_order: Option<ByteOrder>,

    /// Show the native bytes of a float
    #[arg(long, allow_hyphen_values = true)]
    float: Option<f32>,

    /// Show the native bytes of a long
    #[arg(long, allow_hyphen_values = true)]
    long: Option<i64>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("ffiprobe: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FfiError> {
    let mut cfg = FfiConfig::from_env()?;
    if let Some(long_size) = cli.long_size {
        cfg.set_long_size(long_size);
    }
    if let Some(byte_order) = cli.byte_order {
        cfg.set_byte_order(byte_order);
    }
    let platform = platform::init(cfg.platform()?)?;

    println!("long size:    {} bytes", platform.long_size());
    println!("long shift:   {}", platform.long_shift());
    println!("long mask:    {:#x}", platform.long_mask());
    println!("pointer size: {} bytes", platform.pointer_size());
    println!("byte order:   {}", platform.byte_order());

    if let Some(value) = cli.float {
        let reference = FloatByReference::new(value);
        let mut buffer = vec![0u8; reference.native_size()];
        reference.marshal(&mut buffer)?;
        println!("float {}: {}", value, hex(&buffer));
    }

    if let Some(value) = cli.long {
        let reference = NativeLongByReference::new(*NativeLong::value_of(value));
        let mut buffer = vec![0u8; reference.native_size()];
        reference.marshal(&mut buffer)?;
        println!("long {}: {}", value, hex(&buffer));
    }
    return Ok(());
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
