pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        return format!("{:.2} GiB", bytes_f64 / GIB);
    }
    if bytes_f64 >= MIB {
        return format!("{:.2} MiB", bytes_f64 / MIB);
    }
    if bytes_f64 >= KIB {
        return format!("{:.2} KiB", bytes_f64 / KIB);
    }
    format!("{bytes} B")
}
