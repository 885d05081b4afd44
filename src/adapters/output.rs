use std::io::Write;

/// Write each cookie identifier on its own line.
pub fn output_cookies<W: Write>(cookies: &[String], mut writer: W) {
    for cookie in cookies {
        let _ = writeln!(writer, "{}", cookie);
    }

    let _ = writer.flush();
}
