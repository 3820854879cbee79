use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match usbreset::device_path_from_args(std::env::args_os())
        .and_then(|path| usbreset::reset_device(path))
    {
        Ok(done) => {
            println!("{}", done);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
