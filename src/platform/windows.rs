//! Windows-specific functionality: shell folders, short paths and the
//! `Shell Folders` registry key.

use windows::{
    core::{w, HSTRING},
    Win32::{
        Foundation::{ERROR_SUCCESS, HANDLE, HWND, MAX_PATH},
        Storage::FileSystem::GetShortPathNameW,
        System::Registry::{RegGetValueW, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ},
        UI::Shell::SHGetFolderPathW,
    },
};

use crate::error::{DirectoryError, Result};
use crate::folder_source::{FolderLookup, ShellFolderApi};
use crate::models::{FolderId, RegistryHive};

/// Size of every path buffer, in UTF-16 code units.
const PATH_BUF_LEN: usize = 1024;

/// `SHGETFOLDERPATH_DEFAULT`: return the folder's current path.
const SHGFP_TYPE_CURRENT: u32 = 0;

/// `SHGetFolderPathW` and `GetShortPathNameW`.
pub struct NativeShell;

impl ShellFolderApi for NativeShell {
    fn folder_path(&self, csidl: i32) -> Result<String> {
        let mut buf = [0u16; PATH_BUF_LEN];

        // SHGetFolderPathW writes at most MAX_PATH units.
        let head = buf
            .first_chunk_mut::<{ MAX_PATH as usize }>()
            .ok_or_else(|| DirectoryError::resolution_failed(csidl_label(csidl), "path buffer too small"))?;

        // SAFETY: `head` is a live, writable MAX_PATH-sized buffer for the
        // duration of the call. Null owner window and token are documented
        // as "current user".
        unsafe { SHGetFolderPathW(HWND::default(), csidl, HANDLE::default(), SHGFP_TYPE_CURRENT, head) }
            .map_err(|e| {
                DirectoryError::resolution_failed(
                    csidl_label(csidl),
                    format!("SHGetFolderPathW failed (error {:#010x})", e.code().0 as u32),
                )
            })?;

        Ok(string_from_buf(&buf))
    }

    fn short_path_name(&self, path: &str) -> Option<String> {
        let long = HSTRING::from(path);
        let mut buf = [0u16; PATH_BUF_LEN];

        // SAFETY: `long` is null-terminated and outlives the call; the output
        // slice length bounds every write.
        let len = unsafe { GetShortPathNameW(&long, Some(&mut buf)) } as usize;

        // Zero is failure; a length >= the buffer means it did not fit.
        if len == 0 || len >= buf.len() {
            return None;
        }
        Some(String::from_utf16_lossy(&buf[..len]))
    }
}

/// Reads `HKCU` (or `HKLM` for common app data)
/// `Software\Microsoft\Windows\CurrentVersion\Explorer\Shell Folders`.
pub struct RegistryLookup;

impl FolderLookup for RegistryLookup {
    fn lookup(&self, folder: FolderId) -> Result<String> {
        let hkey = match folder.registry_hive() {
            RegistryHive::LocalMachine => HKEY_LOCAL_MACHINE,
            RegistryHive::CurrentUser => HKEY_CURRENT_USER,
        };
        let value = HSTRING::from(folder.shell_folder_value());

        let mut buf = [0u16; PATH_BUF_LEN];
        let mut size = std::mem::size_of_val(&buf) as u32;

        // SAFETY: `buf` is writable for `size` bytes and `size` is a live u32;
        // both outlive the call. The key and value names are null-terminated.
        let status = unsafe {
            RegGetValueW(
                hkey,
                w!("Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\Shell Folders"),
                &value,
                RRF_RT_REG_SZ,
                None,
                Some(buf.as_mut_ptr().cast()),
                Some(&mut size as *mut u32),
            )
        };

        if status != ERROR_SUCCESS {
            return Err(DirectoryError::resolution_failed(
                folder.as_str(),
                format!("RegGetValueW({}) failed (error {})", folder.shell_folder_value(), status.0),
            ));
        }

        let units = (size as usize / std::mem::size_of::<u16>()).min(buf.len());
        Ok(string_from_buf(&buf[..units]))
    }
}

fn csidl_label(csidl: i32) -> String {
    FolderId::ALL
        .into_iter()
        .find(|id| id.csidl() == csidl)
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|| format!("CSIDL {csidl}"))
}

/// Convert a null-terminated UTF-16 buffer to a `String`.
fn string_from_buf(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_from_buf_stops_at_null() {
        let buf: Vec<u16> = "C:\\Users\0garbage".encode_utf16().collect();
        assert_eq!(string_from_buf(&buf), "C:\\Users");
    }

    #[test]
    fn test_csidl_label() {
        assert_eq!(csidl_label(26), "CSIDL_APPDATA");
        assert_eq!(csidl_label(7), "CSIDL 7");
    }

    #[test]
    fn test_native_appdata_resolves() {
        let path = NativeShell.folder_path(FolderId::AppData.csidl()).unwrap();
        assert!(!path.is_empty());
    }
}
